#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

impl<T> Node<T> {
    pub(crate) fn new(prev: Option<usize>, value: T, next: Option<usize>) -> Self {
        Self { value, prev, next }
    }
}
