//! Helpers shared by the page view integration tests.

#![allow(dead_code)]

use portfolio_model::{PageView, PortfolioConfig, RecordingHost};

/// A page view whose host renders every configured section.
pub fn mounted_view(config: PortfolioConfig) -> PageView<RecordingHost> {
    let ids: Vec<String> = config
        .sections
        .iter()
        .map(|s| s.as_str().to_string())
        .collect();
    PageView::new(config, RecordingHost::with_elements(&ids))
}

pub fn default_view() -> PageView<RecordingHost> {
    mounted_view(PortfolioConfig::default())
}

/// Fill the contact form with the reference message.
pub fn fill_ada(view: &mut PageView<RecordingHost>) {
    view.update_field("name", "Ada");
    view.update_field("email", "ada@x.com");
    view.update_field("message", "Hi");
}

pub const ADA_MAILTO: &str = "mailto:natenaelnebiyu@gmail.com?subject=Portfolio%20Contact%20from%20Ada&body=Name%3A%20Ada%0AEmail%3A%20ada%40x.com%0A%0AMessage%3A%0AHi";
