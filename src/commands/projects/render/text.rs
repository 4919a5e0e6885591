//! Terminal surface: boxed cards printed as they are revealed.

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use super::CardGrid;
use crate::commands::projects::card::DisplayCard;
use crate::shared::reveal::{ElementId, RevealEvent, RevealWatcher, Subscription};
use crate::shared::table::{pad_or_truncate, wrap_to_width};

/// Inner width of a card, excluding borders and padding.
const CARD_WIDTH: usize = 60;

fn row(content: &str) -> String {
    format!("│ {} │", pad_or_truncate(content, CARD_WIDTH))
}

/// Render one card as a bordered block.
pub fn format_card(card: &DisplayCard) -> String {
    let border = "─".repeat(CARD_WIDTH + 2);
    let title_width = CARD_WIDTH.saturating_sub(card.badge.width() + 1);
    let meta = if card.placeholder {
        format!("{} (planned)", card.meta)
    } else {
        card.meta.clone()
    };

    let mut lines = vec![
        format!("╭{border}╮"),
        row(&format!(
            "{} {}",
            pad_or_truncate(&card.title, title_width),
            card.badge
        )),
        row(&meta),
        row(""),
    ];
    lines.extend(
        wrap_to_width(&card.description, CARD_WIDTH)
            .iter()
            .map(|l| row(l)),
    );
    lines.push(row(""));
    lines.push(row(&format!("{}: {}", card.link_label, card.link)));
    lines.push(format!("╰{border}╯"));
    lines.join("\n")
}

/// Print every card in `grid` once its subscription reports it visible,
/// then the status line.
///
/// The terminal has no scrolling viewport to observe, so a driver task
/// reveals cards in order, waiting out each card's reveal delay.
pub async fn reveal_cards<W: Write>(
    grid: &CardGrid,
    watcher: &RevealWatcher,
    subscriptions: Vec<Subscription>,
    out: &mut W,
) -> io::Result<()> {
    let schedule: Vec<(ElementId, std::time::Duration)> = grid
        .elements()
        .iter()
        .map(|(id, card)| (*id, card.reveal_delay()))
        .collect();
    let driver_watcher = watcher.clone();
    let driver = tokio::spawn(async move {
        let mut elapsed = std::time::Duration::ZERO;
        for (id, delay) in schedule {
            if delay > elapsed {
                tokio::time::sleep(delay - elapsed).await;
                elapsed = delay;
            }
            driver_watcher.reveal(id);
        }
    });

    for mut subscription in subscriptions {
        match subscription.next().await {
            Some(RevealEvent::Entered { id }) => {
                if let Some(card) = grid.card(id) {
                    writeln!(out, "{}", format_card(card))?;
                    out.flush()?;
                }
            }
            None => tracing::debug!(id = subscription.id(), "card removed before reveal"),
        }
    }

    if let Err(e) = driver.await {
        tracing::warn!(error = %e, "reveal driver stopped unexpectedly");
    }

    if let Some(status) = grid.status() {
        writeln!(out, "{status}")?;
    }
    Ok(())
}
