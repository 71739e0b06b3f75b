/// A type that collects the steps taken by the simplifier.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. This
/// is what [`simplify`](super::simplify) uses when the caller is only interested in the result.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
