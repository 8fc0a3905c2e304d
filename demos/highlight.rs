//! Walkthrough of the annotation pipeline over the embedded content.
//!
//! Run with: `cargo run --example highlight`

use emphasis::annotate;
use emphasis::content::Portfolio;
use emphasis::formats::AnnotationSerialization;
use emphasis::formats::markup::MarkupFormat;

fn main() {
    // Direct use of the annotator.
    let keywords = vec![
        "reinforcement learning".to_string(),
        "learning systems".to_string(),
    ];
    let spans = annotate("reinforcement learning systems", &keywords);
    for span in &spans {
        println!("{:?} [{}, {}) {:?}", span.kind, span.start, span.end, span.text);
    }

    // Annotated highlights for the first experience entry.
    let portfolio = Portfolio::new();
    let annotated = portfolio.annotated_highlights(0).expect("entry exists");

    println!();
    for line in &annotated {
        let rendered = MarkupFormat
            .serialize(line)
            .expect("markup serialization cannot fail on annotator output");
        println!("- {}", String::from_utf8(rendered).expect("markup is utf-8"));
    }
}
