use crate::editing::Cmd;

/// An in-progress drag gesture over the block list.
///
/// The committed list is never touched while dragging; `order` only describes
/// how the list would look if the block were dropped on the hovered slot.
/// Dropping yields the [`Cmd::MoveBlock`] to apply; dropping the session
/// without calling [`DragSession::drop_on`] cancels the gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    from: usize,
    over: usize,
    len: usize,
}

impl DragSession {
    /// Begin dragging the block at `from` in a list of `len` blocks.
    pub fn start(from: usize, len: usize) -> Option<Self> {
        (from < len).then_some(Self {
            from,
            over: from,
            len,
        })
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn over(&self) -> usize {
        self.over
    }

    /// Track the slot under the pointer. Out-of-range slots are ignored.
    pub fn hover(&mut self, over: usize) -> bool {
        if over >= self.len || over == self.over {
            return false;
        }
        self.over = over;
        true
    }

    /// Provisional order as indices into the committed list.
    pub fn order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.len).collect();
        let dragged = order.remove(self.from);
        order.insert(self.over, dragged);
        order
    }

    /// Finish the gesture on `target`. No target means the drop missed.
    pub fn drop_on(self, target: Option<usize>) -> Option<Cmd> {
        let to = target?;
        (to < self.len && to != self.from).then_some(Cmd::MoveBlock {
            from: self.from,
            to: Some(to),
        })
    }

    pub fn cancel(self) {
        log::debug!("drag from {} cancelled", self.from);
    }
}
