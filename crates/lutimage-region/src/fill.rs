//! Flood fill strategies
//!
//! A flood fill relabels the maximal 4-connected region around a seed pixel,
//! that is every pixel reachable from the seed through left/right/up/down
//! steps on pixels that carry the seed's original label. Three strategies
//! produce identical results and differ only in visitation order:
//!
//! - [`RecursiveFill`] - depth-first recursion. Call-stack depth grows with
//!   the region size, so very large regions can overflow the thread stack.
//! - [`StackFill`] - depth-first with an explicit [`CoordStack`]
//! - [`QueueFill`] - breadth-first with a [`CoordQueue`]
//!
//! The order is observable through a [`FillTrace`].

use crate::error::{RegionError, RegionResult};
use lutimage_core::{
    CoordQueue, CoordStack, DEFAULT_WORKLIST_CAPACITY, LabeledImage, Label, PixelCoord, Worklist,
};
use std::fmt;

/// Observer of a flood fill in progress
pub trait FillTrace {
    /// Called once per relabeled pixel, in visitation order.
    fn visit(&mut self, coord: PixelCoord);

    /// Called by worklist strategies with the number of pending entries
    /// after each relabeled pixel.
    fn pending(&mut self, _len: usize) {}

    /// Called once per label read from the pixel array.
    fn read(&mut self) {}
}

/// Trace that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl FillTrace for NoTrace {
    #[inline]
    fn visit(&mut self, _coord: PixelCoord) {}
}

/// Records the visitation order
impl FillTrace for Vec<PixelCoord> {
    fn visit(&mut self, coord: PixelCoord) {
        self.push(coord);
    }
}

/// Counters collected during a fill
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillStats {
    /// Number of relabeled pixels
    pub visited: usize,
    /// Largest worklist size observed (0 for the recursive strategy)
    pub peak_pending: usize,
    /// Number of labels read from the pixel array
    pub pixel_reads: usize,
}

impl FillTrace for FillStats {
    fn visit(&mut self, _coord: PixelCoord) {
        self.visited += 1;
    }

    fn pending(&mut self, len: usize) {
        self.peak_pending = self.peak_pending.max(len);
    }

    fn read(&mut self) {
        self.pixel_reads += 1;
    }
}

/// A flood fill algorithm
///
/// All implementations share one contract. Given a seed `(u, v)` inside the
/// image and a `label` present in its LUT, let `target` be the seed's
/// current label:
///
/// - if `target == label` nothing changes and 0 is returned;
/// - otherwise every pixel 4-connected to the seed through pixels equal to
///   `target` is set to `label`, and the number of such pixels is returned.
pub trait FillStrategy {
    /// Short lowercase name for logs and reports
    fn name(&self) -> &'static str;

    /// Fill from `(u, v)` and report each step to `trace`.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the image or `label` is not in the LUT.
    fn fill_traced(
        &self,
        image: &mut LabeledImage,
        u: i32,
        v: i32,
        label: Label,
        trace: &mut dyn FillTrace,
    ) -> usize;

    /// Fill from `(u, v)`, returning the number of relabeled pixels.
    ///
    /// # Panics
    ///
    /// Panics if `(u, v)` is outside the image or `label` is not in the LUT.
    fn fill(&self, image: &mut LabeledImage, u: i32, v: i32, label: Label) -> usize {
        self.fill_traced(image, u, v, label, &mut NoTrace)
    }

    /// Checked variant of [`fill`](FillStrategy::fill).
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidSeed`] or [`RegionError::InvalidLabel`]
    /// instead of panicking.
    fn try_fill(
        &self,
        image: &mut LabeledImage,
        u: i32,
        v: i32,
        label: Label,
    ) -> RegionResult<usize> {
        if !image.is_valid_pixel(u, v) {
            return Err(RegionError::InvalidSeed { u, v });
        }
        if label as usize >= image.num_colors() {
            return Err(RegionError::InvalidLabel {
                label,
                num_colors: image.num_colors(),
            });
        }
        Ok(self.fill(image, u, v, label))
    }
}

/// Panic unless the seed is inside the image and the label is in its LUT.
fn check_preconditions(image: &LabeledImage, u: i32, v: i32, label: Label) {
    assert!(
        image.is_valid_pixel(u, v),
        "seed ({u}, {v}) outside {}x{} image",
        image.width(),
        image.height()
    );
    assert!(
        (label as usize) < image.num_colors(),
        "fill label {label} not in LUT of {} colors",
        image.num_colors()
    );
}

/// Depth-first fill by recursion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecursiveFill;

impl RecursiveFill {
    fn visit(
        image: &mut LabeledImage,
        coord: PixelCoord,
        target: Label,
        label: Label,
        trace: &mut dyn FillTrace,
    ) -> usize {
        match image.get_label(coord.u(), coord.v()) {
            Some(current) => {
                trace.read();
                if current != target {
                    return 0;
                }
            }
            None => return 0,
        }
        image.set_label(coord.u(), coord.v(), label);
        trace.visit(coord);

        let mut count = 1;
        for next in coord.neighbors4() {
            count += Self::visit(image, next, target, label, trace);
        }
        count
    }
}

impl FillStrategy for RecursiveFill {
    fn name(&self) -> &'static str {
        "recursive"
    }

    fn fill_traced(
        &self,
        image: &mut LabeledImage,
        u: i32,
        v: i32,
        label: Label,
        trace: &mut dyn FillTrace,
    ) -> usize {
        check_preconditions(image, u, v, label);
        let target = image.label(u, v);
        trace.read();
        if target == label {
            return 0;
        }
        Self::visit(image, PixelCoord::new(u, v), target, label, trace)
    }
}

/// Shared loop of the stack and queue strategies.
///
/// A coordinate is relabeled when taken, if it still carries `target`; then
/// all of its in-bounds neighbors are put. Coordinates may be put more than
/// once; stale entries are skipped when taken.
fn worklist_fill<W: Worklist>(
    image: &mut LabeledImage,
    u: i32,
    v: i32,
    label: Label,
    trace: &mut dyn FillTrace,
) -> usize {
    check_preconditions(image, u, v, label);
    let target = image.label(u, v);
    trace.read();
    if target == label {
        return 0;
    }

    let mut work = W::with_capacity(DEFAULT_WORKLIST_CAPACITY);
    work.put(PixelCoord::new(u, v));

    let mut count = 0;
    while let Some(coord) = work.take() {
        trace.read();
        if image.label(coord.u(), coord.v()) != target {
            continue;
        }
        image.set_label(coord.u(), coord.v(), label);
        trace.visit(coord);
        count += 1;

        for next in coord.neighbors4() {
            if image.contains(next) {
                work.put(next);
            }
        }
        trace.pending(work.len());
    }
    count
}

/// Depth-first fill driven by a [`CoordStack`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackFill;

impl FillStrategy for StackFill {
    fn name(&self) -> &'static str {
        "stack"
    }

    fn fill_traced(
        &self,
        image: &mut LabeledImage,
        u: i32,
        v: i32,
        label: Label,
        trace: &mut dyn FillTrace,
    ) -> usize {
        worklist_fill::<CoordStack>(image, u, v, label, trace)
    }
}

/// Breadth-first fill driven by a [`CoordQueue`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueFill;

impl FillStrategy for QueueFill {
    fn name(&self) -> &'static str {
        "queue"
    }

    fn fill_traced(
        &self,
        image: &mut LabeledImage,
        u: i32,
        v: i32,
        label: Label,
        trace: &mut dyn FillTrace,
    ) -> usize {
        worklist_fill::<CoordQueue>(image, u, v, label, trace)
    }
}

/// Runtime selection of a fill strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMethod {
    /// [`RecursiveFill`]
    Recursive,
    /// [`StackFill`]
    #[default]
    Stack,
    /// [`QueueFill`]
    Queue,
}

impl FillMethod {
    /// Every method, in a fixed order
    pub const ALL: [FillMethod; 3] = [Self::Recursive, Self::Stack, Self::Queue];

    fn strategy(self) -> &'static dyn FillStrategy {
        match self {
            Self::Recursive => &RecursiveFill,
            Self::Stack => &StackFill,
            Self::Queue => &QueueFill,
        }
    }
}

impl FillStrategy for FillMethod {
    fn name(&self) -> &'static str {
        self.strategy().name()
    }

    fn fill_traced(
        &self,
        image: &mut LabeledImage,
        u: i32,
        v: i32,
        label: Label,
        trace: &mut dyn FillTrace,
    ) -> usize {
        self.strategy().fill_traced(image, u, v, label, trace)
    }
}

impl fmt::Display for FillMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fill with [`RecursiveFill`]
///
/// # Panics
///
/// Panics if `(u, v)` is outside the image or `label` is not in the LUT.
pub fn fill_recursive(image: &mut LabeledImage, u: i32, v: i32, label: Label) -> usize {
    RecursiveFill.fill(image, u, v, label)
}

/// Fill with [`StackFill`]
///
/// # Panics
///
/// Panics if `(u, v)` is outside the image or `label` is not in the LUT.
pub fn fill_with_stack(image: &mut LabeledImage, u: i32, v: i32, label: Label) -> usize {
    StackFill.fill(image, u, v, label)
}

/// Fill with [`QueueFill`]
///
/// # Panics
///
/// Panics if `(u, v)` is outside the image or `label` is not in the LUT.
pub fn fill_with_queue(image: &mut LabeledImage, u: i32, v: i32, label: Label) -> usize {
    QueueFill.fill(image, u, v, label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lutimage_core::{BACKGROUND, BLACK_LABEL, Rgb};

    /// 5x5 white image with a black vertical wall at u = 2
    fn walled() -> LabeledImage {
        let mut img = LabeledImage::new(5, 5).unwrap();
        for v in 0..5 {
            img.set_label(2, v, BLACK_LABEL);
        }
        img
    }

    #[test]
    fn test_fill_stops_at_wall() {
        for method in FillMethod::ALL {
            let mut img = walled();
            let red = img.alloc_color(Rgb::from_channels(255, 0, 0)).unwrap();
            assert_eq!(method.fill(&mut img, 0, 0, red), 10, "{method}");
            assert_eq!(img.count_label(red), 10);
            assert_eq!(img.label(3, 0), BACKGROUND);
            assert_eq!(img.count_label(BLACK_LABEL), 5);
        }
    }

    #[test]
    fn test_fill_same_label_is_noop() {
        for method in FillMethod::ALL {
            let mut img = walled();
            let before = img.clone();
            assert_eq!(method.fill(&mut img, 2, 3, BLACK_LABEL), 0);
            assert_eq!(img.labels(), before.labels());
        }
    }

    #[test]
    fn test_fill_whole_image() {
        let mut img = LabeledImage::new(7, 4).unwrap();
        assert_eq!(fill_with_queue(&mut img, 6, 3, BLACK_LABEL), 28);
        assert_eq!(fill_with_stack(&mut img, 0, 0, BACKGROUND), 28);
        assert_eq!(fill_recursive(&mut img, 3, 2, BLACK_LABEL), 28);
    }

    #[test]
    fn test_fill_single_pixel_region() {
        let mut img = LabeledImage::new(3, 3).unwrap();
        img.set_label(1, 1, BLACK_LABEL);
        assert_eq!(fill_recursive(&mut img, 1, 1, BACKGROUND), 1);
        assert_eq!(img.count_label(BACKGROUND), 9);
    }

    #[test]
    fn test_visit_orders() {
        // Plus-shaped region: seed plus its four neighbors
        let mut stack_order = Vec::new();
        let mut img = LabeledImage::new(3, 3).unwrap();
        StackFill.fill_traced(&mut img, 1, 1, BLACK_LABEL, &mut stack_order);

        let mut queue_order = Vec::new();
        let mut img = LabeledImage::new(3, 3).unwrap();
        QueueFill.fill_traced(&mut img, 1, 1, BLACK_LABEL, &mut queue_order);

        let mut recursive_order = Vec::new();
        let mut img = LabeledImage::new(3, 3).unwrap();
        RecursiveFill.fill_traced(&mut img, 1, 1, BLACK_LABEL, &mut recursive_order);

        // Breadth-first: seed, then left, right, up, down
        assert_eq!(
            &queue_order[..5],
            &[
                PixelCoord::new(1, 1),
                PixelCoord::new(0, 1),
                PixelCoord::new(2, 1),
                PixelCoord::new(1, 0),
                PixelCoord::new(1, 2),
            ]
        );
        // Depth-first from the stack: the last pushed neighbor (down) first
        assert_eq!(stack_order[1], PixelCoord::new(1, 2));
        // Recursion descends into the left neighbor first
        assert_eq!(recursive_order[1], PixelCoord::new(0, 1));

        assert_eq!(queue_order.len(), 9);
        assert_eq!(stack_order.len(), 9);
        assert_eq!(recursive_order.len(), 9);
        assert_ne!(stack_order, queue_order);
    }

    #[test]
    fn test_fill_stats() {
        let mut img = LabeledImage::new(10, 10).unwrap();
        let mut stats = FillStats::default();
        let count = QueueFill.fill_traced(&mut img, 5, 5, BLACK_LABEL, &mut stats);
        assert_eq!(count, 100);
        assert_eq!(stats.visited, 100);
        assert!(stats.peak_pending > 1);

        let mut img = LabeledImage::new(10, 10).unwrap();
        let mut stats = FillStats::default();
        RecursiveFill.fill_traced(&mut img, 5, 5, BLACK_LABEL, &mut stats);
        assert_eq!(stats.visited, 100);
        assert_eq!(stats.peak_pending, 0);
    }

    #[test]
    fn test_fill_stats_pixel_reads() {
        // Single pixel: the target lookup plus the seed itself
        for method in FillMethod::ALL {
            let mut img = LabeledImage::new(1, 1).unwrap();
            let mut stats = FillStats::default();
            method.fill_traced(&mut img, 0, 0, BLACK_LABEL, &mut stats);
            assert_eq!(stats.pixel_reads, 2, "{method}");
        }

        // Full 10x10 fill: every one of the 180 adjacencies is read from
        // both sides, plus the seed and the target lookup
        for method in FillMethod::ALL {
            let mut img = LabeledImage::new(10, 10).unwrap();
            let mut stats = FillStats::default();
            method.fill_traced(&mut img, 5, 5, BLACK_LABEL, &mut stats);
            assert_eq!(stats.pixel_reads, 1 + 1 + 2 * 180, "{method}");
        }

        // A no-op fill still reads the seed
        let mut img = LabeledImage::new(3, 3).unwrap();
        let mut stats = FillStats::default();
        StackFill.fill_traced(&mut img, 1, 1, BACKGROUND, &mut stats);
        assert_eq!(
            stats,
            FillStats {
                visited: 0,
                peak_pending: 0,
                pixel_reads: 1,
            }
        );
    }

    #[test]
    fn test_try_fill_errors() {
        let mut img = LabeledImage::new(4, 4).unwrap();
        assert!(matches!(
            StackFill.try_fill(&mut img, 4, 0, BLACK_LABEL),
            Err(RegionError::InvalidSeed { u: 4, v: 0 })
        ));
        assert!(matches!(
            QueueFill.try_fill(&mut img, -1, 2, BLACK_LABEL),
            Err(RegionError::InvalidSeed { .. })
        ));
        assert!(matches!(
            RecursiveFill.try_fill(&mut img, 0, 0, 2),
            Err(RegionError::InvalidLabel {
                label: 2,
                num_colors: 2
            })
        ));
        assert_eq!(StackFill.try_fill(&mut img, 0, 0, BLACK_LABEL).unwrap(), 16);
    }

    #[test]
    #[should_panic(expected = "outside 4x4 image")]
    fn test_fill_invalid_seed_panics() {
        let mut img = LabeledImage::new(4, 4).unwrap();
        fill_with_stack(&mut img, 0, 4, BLACK_LABEL);
    }

    #[test]
    #[should_panic(expected = "not in LUT")]
    fn test_fill_invalid_label_panics() {
        let mut img = LabeledImage::new(4, 4).unwrap();
        fill_with_queue(&mut img, 0, 0, 7);
    }

    #[test]
    fn test_method_names() {
        assert_eq!(FillMethod::Recursive.to_string(), "recursive");
        assert_eq!(FillMethod::Stack.name(), "stack");
        assert_eq!(FillMethod::Queue.name(), QueueFill.name());
    }
}
