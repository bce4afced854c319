use alloc::vec::Vec;

use crate::Frame;

/// Wraps a frame observer and enforces the highlight contract.
///
/// - Out-of-bounds indexes are dropped (and debug-asserted).
/// - The number of emitted frames is tracked for completion logging.
pub struct FrameEmitter<'a> {
    emit: &'a mut dyn FnMut(Frame<'_>),
    emitted: usize,
}

impl<'a> FrameEmitter<'a> {
    pub fn new(emit: &'a mut dyn FnMut(Frame<'_>)) -> Self {
        Self { emit, emitted: 0 }
    }

    /// Number of frames pushed so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    pub fn emit(&mut self, values: &[i64], inspected: &[usize], confirmed: &[usize]) {
        let len = values.len();
        if inspected.iter().chain(confirmed).all(|&i| i < len) {
            self.push(values, inspected, confirmed);
            return;
        }

        vwarn!(len, "FrameEmitter: out-of-bounds highlight index");
        debug_assert!(
            inspected.iter().chain(confirmed).all(|&i| i < len),
            "FrameEmitter: out-of-bounds highlight index (len={len})"
        );
        let inspected: Vec<usize> = inspected.iter().copied().filter(|&i| i < len).collect();
        let confirmed: Vec<usize> = confirmed.iter().copied().filter(|&i| i < len).collect();
        self.push(values, &inspected, &confirmed);
    }

    /// Highlights `index` as inspected.
    pub fn inspect(&mut self, values: &[i64], index: usize) {
        self.emit(values, &[index], &[]);
    }

    /// Highlights `index` as inspected and confirmed in the same frame.
    pub fn confirm(&mut self, values: &[i64], index: usize) {
        self.emit(values, &[index], &[index]);
    }

    /// Highlights the inclusive block `start..=end` as inspected.
    pub fn inspect_block(&mut self, values: &[i64], start: usize, end: usize) {
        let block: Vec<usize> = (start..=end).collect();
        self.emit(values, &block, &[]);
    }

    /// Emits a frame with nothing highlighted.
    pub fn clear(&mut self, values: &[i64]) {
        self.emit(values, &[], &[]);
    }

    /// Emits a frame with every index confirmed.
    pub fn settle(&mut self, values: &[i64]) {
        let all: Vec<usize> = (0..values.len()).collect();
        self.emit(values, &[], &all);
    }

    fn push(&mut self, values: &[i64], inspected: &[usize], confirmed: &[usize]) {
        self.emitted += 1;
        (self.emit)(Frame {
            values,
            inspected,
            confirmed,
        });
    }
}
