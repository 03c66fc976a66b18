//! Renders the same title at each of the pre-defined card sizes.

use og_card::cardsize;
use og_card::{Card, Font};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let font_path = args.next().expect("usage: sizes <font.ttf>");
    let font = Font::load(std::fs::read(&font_path).expect("can read font file"))
        .expect("can parse font");

    let sizes = [
        ("open-graph", cardsize::OPEN_GRAPH),
        ("twitter-large", cardsize::TWITTER_LARGE),
        ("square", cardsize::SQUARE),
    ];

    for (name, size) in sizes {
        let mut card = Card::new(lipsum::lipsum(12), "An Opinionated Blog".to_string());
        card.size = size;
        let png = card.render(&font).expect("can render card");
        let path = format!("card-{name}.png");
        std::fs::write(&path, png).expect("can write output");
        println!("wrote {path}");
    }
}
