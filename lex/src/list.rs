use serde::Serialize;

use crate::inst::Inst;

/// Instructions in source order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstList(Vec<Inst>);

/// What a teardown gave back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Released {
    pub insts: usize,
    pub names: usize,
}

impl InstList {
    pub fn new() -> Self {
        InstList(Vec::new())
    }

    pub(crate) fn append(&mut self, inst: Inst) {
        self.0.push(inst);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Inst> {
        self.0.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Inst> {
        self.0.iter()
    }

    /// Drops every instruction front to back in one loop.
    pub fn destroy(self) -> Released {
        let mut released = Released::default();
        for inst in self.0 {
            released.insts += 1;
            released.names += inst.names().count();
        }
        released
    }
}

impl<'a> IntoIterator for &'a InstList {
    type Item = &'a Inst;
    type IntoIter = std::slice::Iter<'a, Inst>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for InstList {
    type Item = Inst;
    type IntoIter = std::vec::IntoIter<Inst>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
