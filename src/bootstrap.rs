//! Page activation.
//!
//! The profile script runs once the page structure exists. If the page is
//! still loading, both renderers are registered for its structure-parsed
//! notification; otherwise they run right away.

use tracing::{debug, warn};

use crate::page::{Document, ReadyState, TargetProvider};
use crate::render::{ChartingCapability, CitationChartRenderer, PublicationRenderer};

/// How `activate` scheduled the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Registered to run when the page finishes parsing
    Deferred,
    /// Ran synchronously on an already parsed page
    Immediate,
}

/// Both renderers plus the charting backend they draw with.
pub struct ProfileScript<'a, C> {
    publications: PublicationRenderer<'a>,
    chart: CitationChartRenderer<'a>,
    charting: C,
}

impl<'a, C: ChartingCapability> ProfileScript<'a, C> {
    pub fn new(
        publications: PublicationRenderer<'a>,
        chart: CitationChartRenderer<'a>,
        charting: C,
    ) -> Self {
        Self {
            publications,
            chart,
            charting,
        }
    }

    /// Publications first, then the chart. A failing renderer is logged and
    /// does not stop the other one.
    pub fn run<T>(&mut self, targets: &mut T)
    where
        T: TargetProvider + ?Sized,
    {
        if let Err(e) = self.publications.render(targets) {
            warn!("Failed to render publications: {}", e);
        }
        if let Err(e) = self.chart.render(targets, &mut self.charting) {
            warn!("Failed to render citation chart: {}", e);
        }
    }
}

pub fn activate<'cb, C>(document: &mut Document<'cb>, mut script: ProfileScript<'cb, C>) -> Activation
where
    C: ChartingCapability + 'cb,
{
    match document.ready_state() {
        ReadyState::Loading => {
            debug!("page still loading, deferring render");
            document.add_content_loaded_listener(move |elements| script.run(elements));
            Activation::Deferred
        }
        ReadyState::Ready => {
            script.run(document);
            Activation::Immediate
        }
    }
}
