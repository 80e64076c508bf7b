use std::ops::ControlFlow;

/// Called once per epoch, before the parameter update, with the training
/// mean-squared error of the current parameters.
///
/// Returning `ControlFlow::Break` stops training; the model is left exactly
/// as it was before the call.
pub trait EpochObserver {
    fn on_epoch(&mut self, epoch: usize, mse: f64) -> ControlFlow<()>;
}

impl<F> EpochObserver for F
where
    F: FnMut(usize, f64) -> ControlFlow<()>,
{
    fn on_epoch(&mut self, epoch: usize, mse: f64) -> ControlFlow<()> {
        self(epoch, mse)
    }
}

/// Observer that never interrupts.
pub(crate) struct Unobserved;

impl EpochObserver for Unobserved {
    fn on_epoch(&mut self, _epoch: usize, _mse: f64) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        let mut observer = |epoch: usize, mse: f64| {
            seen.push((epoch, mse));
            if epoch == 1 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        };

        assert!(observer.on_epoch(0, 4.0).is_continue());
        assert!(observer.on_epoch(1, 2.0).is_break());
        assert_eq!(seen, vec![(0, 4.0), (1, 2.0)]);
    }

    #[test]
    fn test_unobserved_always_continues() {
        assert!(Unobserved.on_epoch(0, f64::MAX).is_continue());
    }
}
