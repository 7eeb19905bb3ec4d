//! Prints a small card using the layout from `ADAPTIVE_CARDS_OUTPUT`.

use adaptive_cards::{Card, Container, OutputFormat, TextBlock, VERSION_1_2};

fn main() -> Result<(), adaptive_cards::CardError> {
    let card = Card::new(
        vec![
            Container::new(vec![
                TextBlock {
                    is_subtle: Some(false),
                    ..TextBlock::new("foo")
                }
                .into(),
            ])
            .into(),
        ],
        Vec::new(),
    )
    .with_version(VERSION_1_2);

    println!("{}", card.render(&OutputFormat::from_env())?);
    Ok(())
}
