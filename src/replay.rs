//! Frame-by-frame replay of a path that has already been computed.

/// One replay step: the part of the path drawn so far, and the node being highlighted next.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplayFrame<'a, N> {
    pub step: usize,
    pub visible: &'a [N],
    pub current: Option<&'a N>,
}

impl<N> ReplayFrame<'_, N> {
    pub fn is_final(&self) -> bool {
        self.current.is_none()
    }
}

/// Yields `path.len() + 1` frames. Frame `k` shows `path[..k]` with `path[k]` highlighted; the
/// last frame shows the whole path with nothing highlighted.
#[derive(Clone, Debug)]
pub struct PathReplay<'a, N> {
    path: &'a [N],
    step: usize,
}

impl<'a, N> PathReplay<'a, N> {
    pub fn new(path: &'a [N]) -> Self {
        Self { path, step: 0 }
    }
}

impl<'a, N> Iterator for PathReplay<'a, N> {
    type Item = ReplayFrame<'a, N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step > self.path.len() {
            return None;
        }
        let frame = ReplayFrame {
            step: self.step,
            visible: &self.path[..self.step],
            current: self.path.get(self.step),
        };
        self.step += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.path.len() + 1).saturating_sub(self.step);
        (left, Some(left))
    }
}

impl<N> ExactSizeIterator for PathReplay<'_, N> {}
