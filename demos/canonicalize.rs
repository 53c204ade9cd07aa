//! Print the specified and computed serialization of each shape argument.
//!
//! ```text
//! cargo run --example canonicalize --features tracing -- "circle(at left top)" --tree
//! RUST_LOG=basic_shape=debug cargo run --example canonicalize --features tracing -- "inset(1px 2px 1px 2px)"
//! ```

use basic_shape::{
    BasicShapeParser, ReferenceBox, ResolutionContext, Rule, ToCss, basic_shape_for_value, parse,
    resolve,
};
use pest::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut show_tree = false;
    let mut sources = Vec::new();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--tree" => show_tree = true,
            _ => sources.push(arg),
        }
    }
    if sources.is_empty() {
        sources.push("circle(10px at right 20px bottom 30px)".to_string());
    }

    let ctx = ResolutionContext::default();
    let reference = ReferenceBox::from_size(200.0, 100.0);
    for source in &sources {
        if show_tree {
            pest_ascii_tree::print_ascii_tree(BasicShapeParser::parse(Rule::shape, source));
        }

        let value = match parse(source) {
            Ok(value) => value,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(e));
                continue;
            }
        };
        println!("specified: {}", value.to_css_string());

        match basic_shape_for_value(&value, &ctx) {
            Ok(shape) => {
                println!("computed:  {shape}");
                println!("geometry:  {:?}", resolve(&shape, &reference));
            }
            Err(e) => eprintln!("{:?}", miette::Report::new(e)),
        }
    }
}
