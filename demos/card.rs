use og_card::{Card, Font};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let font_path = args
        .next()
        .expect("usage: card <font.ttf> [title] [out.png]");
    let title = args.next().unwrap_or_else(lipsum::lipsum_title);
    let out_path = args.next().unwrap_or_else(|| "card.png".to_string());

    let font_bytes = std::fs::read(&font_path).expect("can read font file");
    let font = Font::load(font_bytes).expect("can parse font");

    let mut card = Card::new(title, "An Opinionated Blog".to_string());
    card.published = Some("2026-08-29".to_string());

    let png = card.render(&font).expect("can render card");
    std::fs::write(&out_path, png).expect("can write output");
    println!("wrote {out_path}");
}
