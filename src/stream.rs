//! Single-pass edge stream with super-node suppression. A super-node
//! contributes no edges at all, never a prefix of them.

use crate::{backend::EdgeIter, errors::HopGraphError, types::Edge};

enum State<'a> {
    /// skip_degree == 0: plain pass-through of the backend iterator.
    Passthrough(EdgeIter<'a>),
    /// skip_degree > 0, not yet polled.
    Unpolled(EdgeIter<'a>),
    /// Drained: at most `degree` buffered edges survive suppression.
    Buffered(std::vec::IntoIter<Edge>),
    Failed(Option<HopGraphError>),
}

pub struct EdgeStream<'a> {
    state: State<'a>,
    degree: i64,
    skip_degree: i64,
}

impl std::fmt::Debug for EdgeStream<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EdgeStream")
            .field("degree", &self.degree)
            .field("skip_degree", &self.skip_degree)
            .finish()
    }
}

impl<'a> EdgeStream<'a> {
    /// Invariant (enforced by `check_skip_degree`): when `skip_degree > 0`,
    /// `degree` is finite and `skip_degree >= degree`.
    pub fn new(edges: EdgeIter<'a>, degree: i64, skip_degree: i64) -> Self {
        let state = if skip_degree > 0 {
            State::Unpolled(edges)
        } else {
            State::Passthrough(edges)
        };
        Self {
            state,
            degree,
            skip_degree,
        }
    }

    /// Consumes the underlying iterator up to the skip_degree-th element,
    /// keeping at most `degree` edges. Reaching skip_degree empties the
    /// whole result.
    fn drain(&mut self, mut edges: EdgeIter<'a>) {
        let mut kept = Vec::new();
        let mut seen: i64 = 0;
        loop {
            match edges.next() {
                None => break,
                Some(Err(err)) => {
                    self.state = State::Failed(Some(err));
                    return;
                }
                Some(Ok(edge)) => {
                    seen += 1;
                    if seen <= self.degree {
                        kept.push(edge);
                    }
                    if seen >= self.skip_degree {
                        self.state = State::Buffered(Vec::new().into_iter());
                        return;
                    }
                }
            }
        }
        self.state = State::Buffered(kept.into_iter());
    }
}

impl Iterator for EdgeStream<'_> {
    type Item = Result<Edge, HopGraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        if matches!(self.state, State::Unpolled(_)) {
            if let State::Unpolled(edges) = std::mem::replace(&mut self.state, State::Failed(None))
            {
                self.drain(edges);
            }
        }
        match &mut self.state {
            State::Passthrough(edges) => edges.next(),
            State::Unpolled(_) => None,
            State::Buffered(buffered) => buffered.next().map(Ok),
            State::Failed(err) => err.take().map(Err),
        }
    }
}
