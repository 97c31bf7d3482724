use super::*;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct RecordingOps {
    setups: AtomicUsize,
    restores: AtomicUsize,
}

impl TerminalOps for &'static RecordingOps {
    fn setup(&self) -> io::Result<()> {
        self.setups.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn restore(&self) -> io::Result<()> {
        self.restores.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[test]
fn drop_restores_exactly_once() {
    static OPS: RecordingOps = RecordingOps {
        setups: AtomicUsize::new(0),
        restores: AtomicUsize::new(0),
    };

    {
        let guard = TerminalGuard::with_ops(Arc::new(&OPS)).unwrap();
        assert_eq!(OPS.setups.load(Ordering::SeqCst), 1);
        guard.restore().unwrap();
        // Drop must not restore a second time.
    }

    assert_eq!(OPS.restores.load(Ordering::SeqCst), 1);
}
