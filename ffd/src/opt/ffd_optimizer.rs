use crate::config::FFDConfig;
use crate::opt::order::item_placement_order;
use crate::opt::search::{PlacementSearch, SearchStep};
use anyhow::Result;
use log::{debug, info, warn};
use sheet_nest::collision_detection::{BBoxOverlap, HullOverlap, OverlapMode};
use sheet_nest::entities::{Instance, Layout, NestSolution};
use sheet_nest::util::assertions;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thousands::Separable;

/// Shared flag to interrupt a running [`FFDOptimizer`], possibly from another thread.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Snapshot passed to the progress hook after every step
#[derive(Clone, Copy, Debug)]
pub struct FFDProgress {
    /// Item currently being searched, `None` once the run is over
    pub item_id: Option<usize>,
    /// Number of items for which the search has concluded
    pub n_attempted: usize,
    pub n_items: usize,
    pub n_placed: usize,
    pub n_candidates: u64,
}

/// What happened during a single [`FFDOptimizer::step`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FFDStep {
    /// The item with this id has been placed
    Placed(usize),
    /// No feasible placement exists for the item with this id
    Unplaceable(usize),
    /// One more rotation of the current item has been evaluated
    Searching,
    /// Every item has been attempted, or the run was cancelled
    Done,
}

/// First-Fit-Decreasing (FFD) optimizer.
///
/// Items are attempted once, in order of decreasing bounding-box area. Each item is placed at the first feasible
/// candidate of a [`PlacementSearch`], or reported unplaceable. There is no backtracking.
/// The run can be advanced one rotation at a time with [`FFDOptimizer::step`], or at once with [`FFDOptimizer::solve`].
pub struct FFDOptimizer {
    pub instance: Instance,
    pub config: FFDConfig,
    layout: Layout,
    order: Vec<usize>,
    /// Index in `order` of the item currently being searched
    cursor: usize,
    current: Option<PlacementSearch>,
    unplaced: Vec<usize>,
    cancelled: bool,
    cancel_token: CancelToken,
    on_yield: Option<Box<dyn FnMut(&FFDProgress)>>,
    candidate_counter: u64,
    start: Option<Instant>,
    elapsed: Duration,
}

impl FFDOptimizer {
    pub fn new(instance: Instance, config: FFDConfig) -> Result<Self> {
        config.validate()?;
        let layout = Layout::new(config.sheet()?);
        let order = item_placement_order(&instance);
        Ok(Self {
            instance,
            config,
            layout,
            order,
            cursor: 0,
            current: None,
            unplaced: vec![],
            cancelled: false,
            cancel_token: CancelToken::new(),
            on_yield: None,
            candidate_counter: 0,
            start: None,
            elapsed: Duration::ZERO,
        })
    }

    /// Replaces the optimizer's token by a shared one
    pub fn with_cancel_token(mut self, cancel_token: CancelToken) -> Self {
        self.cancel_token = cancel_token;
        self
    }

    /// Registers a hook that is invoked after every step
    pub fn with_progress_hook(mut self, on_yield: impl FnMut(&FFDProgress) + 'static) -> Self {
        self.on_yield = Some(Box::new(on_yield));
        self
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel_token.clone()
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn is_done(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Advances the run by evaluating a single rotation of the current item.
    pub fn step(&mut self) -> FFDStep {
        let start = *self.start.get_or_insert_with(Instant::now);
        let outcome = self.advance();
        self.elapsed = start.elapsed();

        if let Some(on_yield) = self.on_yield.as_mut() {
            let progress = FFDProgress {
                item_id: self.current.as_ref().map(|s| s.item_id),
                n_attempted: self.cursor,
                n_items: self.order.len(),
                n_placed: self.layout.placed_outlines().len(),
                n_candidates: self.candidate_counter,
            };
            on_yield(&progress);
        }
        outcome
    }

    fn advance(&mut self) -> FFDStep {
        if self.is_done() {
            return FFDStep::Done;
        }
        if self.cancel_token.is_cancelled() {
            self.abort();
            return FFDStep::Done;
        }

        let item_id = self.order[self.cursor];
        let (rotation_step, translation_step) =
            (self.config.rotation_step, self.config.translation_step);
        let search = self.current.get_or_insert_with(|| {
            PlacementSearch::new(self.instance.item(item_id), rotation_step, translation_step)
        });

        let step = match self.config.overlap_test {
            OverlapMode::BBox => search.step(&self.layout, &BBoxOverlap, &mut self.candidate_counter),
            OverlapMode::Hull => search.step(&self.layout, &HullOverlap, &mut self.candidate_counter),
        };

        match step {
            SearchStep::Pending => FFDStep::Searching,
            SearchStep::Found(d_transf) => {
                self.layout.place_item(self.instance.item(item_id), d_transf);
                self.finish_item();
                info!(
                    "[FFD] placing item {}/{} with id {} at [{}]",
                    self.layout.placed_outlines().len(),
                    self.order.len(),
                    item_id,
                    d_transf,
                );
                FFDStep::Placed(item_id)
            }
            SearchStep::Exhausted => {
                self.unplaced.push(item_id);
                self.finish_item();
                warn!("[FFD] no feasible placement found for item {item_id}");
                FFDStep::Unplaceable(item_id)
            }
        }
    }

    fn finish_item(&mut self) {
        self.current = None;
        self.cursor += 1;
    }

    /// Reports the current and all remaining items as unplaced
    fn abort(&mut self) {
        let remaining = &self.order[self.cursor..];
        warn!(
            "[FFD] cancelled, {} item(s) left unattempted",
            remaining.len()
        );
        self.unplaced.extend_from_slice(remaining);
        self.current = None;
        self.cursor = self.order.len();
        self.cancelled = true;
    }

    /// Steps until every item has been attempted or the run is cancelled
    pub fn solve(&mut self) -> NestSolution {
        while self.step() != FFDStep::Done {}

        debug_assert!(assertions::layout_within_sheet(&self.layout));
        debug_assert!(
            self.config.overlap_test != OverlapMode::BBox
                || assertions::no_pairwise_bbox_overlap(&self.layout)
        );

        let solution = NestSolution {
            layout: self.layout.clone(),
            unplaced: self.unplaced.clone(),
            cancelled: self.cancelled,
            n_candidates: self.candidate_counter,
            elapsed: self.elapsed,
        };

        info!(
            "[FFD] optimization finished in {:.3}ms ({} candidates)",
            solution.elapsed.as_secs_f64() * 1000.0,
            solution.n_candidates.separate_with_commas()
        );
        info!(
            "[FFD] solution contains {}/{} items with a usage of {:.3}%",
            solution.placed_outlines().len(),
            self.instance.n_items(),
            solution.usage() * 100.0
        );
        if !solution.unplaced.is_empty() {
            debug!("[FFD] unplaced items: {:?}", solution.unplaced);
        }
        solution
    }
}
