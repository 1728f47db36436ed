//! Sample US political articles offered by the "Load Example Article" button.
use rand::Rng;
use rand::seq::IndexedRandom;

pub const EXAMPLE_ARTICLES: [&str; 4] = [
    "Washington — U.S. Senate leaders on Tuesday continued negotiations over a bipartisan \
     spending bill aimed at preventing a government shutdown. Lawmakers said discussions \
     had made progress but several issues remain unresolved ahead of the deadline.",
    "U.S. officials said on Wednesday the administration is reviewing new border security \
     measures as Congress debates immigration reform proposals. The Department of Homeland \
     Security stated that coordination with lawmakers is ongoing.",
    "BREAKING: Sources claim Washington elites secretly approved a hidden election plan \
     that the media refuses to report. Millions of Americans are unaware of what is about \
     to happen, insiders say.",
    "The White House confirmed Thursday that the president will meet congressional leaders \
     next week to discuss budget priorities and national security concerns.",
];

/// One example article, chosen uniformly at random.
pub fn pick<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    EXAMPLE_ARTICLES
        .choose(rng)
        .copied()
        .unwrap_or(EXAMPLE_ARTICLES[0])
}
