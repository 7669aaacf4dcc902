//! Twist count.
//!
//! Exactly one family applies, tried from most to least specific:
//!
//! 1. fixed count in a player-qualified clause (`2-3 players: 9 Twists`)
//! 2. `Add N Twists to each Reality`
//! 3. `B Twists ... minus|plus K per player`
//! 4. `Twists equal to the number of players plus K`
//! 5. `Twists equal to K plus the number of players`
//! 6. `B Twist(s), plus K Twists per player`
//! 7. `K Twists per player` / `into each player`
//! 8. flat `B Twists`, with an optional separate per-player modifier
//!
//! Results are clamped at zero.

use super::extractor::ExtractContext;
use super::modifiers::{Directive, SchemeModifiers, TwistCount};
use super::number;

pub(crate) fn twists(ctx: &mut ExtractContext<'_>, draft: &SchemeModifiers) -> Vec<Directive> {
    derive_twists(ctx, draft)
        .map(Directive::Twists)
        .into_iter()
        .collect()
}

fn derive_twists(ctx: &ExtractContext<'_>, draft: &SchemeModifiers) -> Option<TwistCount> {
    let players = ctx.players.as_i64();

    for clause in ctx.text.qualified() {
        if let Some(caps) = pattern!(r"(?:use\s+)?\b(\d+)\s+Twists?\b").captures(&clause.text) {
            let condition = clause.condition.as_ref().map(ToString::to_string).unwrap_or_default();
            return Some(TwistCount::derived(
                i64::from(number(caps.get(1))),
                format!("For {condition} players"),
            ));
        }
    }

    let text = ctx.text.applicable_text();

    if let Some(caps) = pattern!(r"Add (\d+) Twists? to each Reality").captures(text) {
        let per_reality = number(caps.get(1));
        let realities = draft.base().villains.saturating_add(draft.extra_villains);
        return Some(TwistCount::derived(
            i64::from(per_reality) * i64::from(realities),
            format!("{per_reality} per Reality x {realities} Realities"),
        ));
    }

    for clause in ctx.text.applicable() {
        if let Some(caps) =
            pattern!(r"\b(\d+)\s+Twists\b.*?\b(minus|plus)\s+(\d+)(?:\s+Twists?)?\s+per\s+player")
                .captures(&clause.text)
        {
            let base = i64::from(number(caps.get(1)));
            let per_player = i64::from(number(caps.get(3)));
            return Some(if caps[2].eq_ignore_ascii_case("minus") {
                TwistCount::derived(base - per_player * players, format!("{base} - {per_player} per player"))
            } else {
                TwistCount::derived(base + per_player * players, format!("{base} + {per_player} per player"))
            });
        }
    }

    if let Some(caps) = pattern!(r"Twists equal to the number of players plus (\d+)").captures(text) {
        let add = i64::from(number(caps.get(1)));
        return Some(TwistCount::derived(players + add, format!("{players} players + {add}")));
    }

    if let Some(caps) = pattern!(r"Twists equal to (\d+) plus (?:the )?number of players").captures(text) {
        let base = i64::from(number(caps.get(1)));
        return Some(TwistCount::derived(base + players, format!("{base} + {players} players")));
    }

    if let Some(caps) =
        pattern!(r"\b(\d+)\s+Twists?,?\s+plus\s+(\d+)\s+Twists?\s+per\s+player").captures(text)
    {
        let base = i64::from(number(caps.get(1)));
        let per_player = i64::from(number(caps.get(2)));
        return Some(TwistCount::derived(
            base + per_player * players,
            format!("{base} + {per_player} per player"),
        ));
    }

    if let Some(caps) = pattern!(r"\b(\d+)\s+Twists? (?:into each|per) player").captures(text) {
        let per_player = i64::from(number(caps.get(1)));
        return Some(TwistCount::derived(per_player * players, format!("{per_player} per player")));
    }

    if let Some(caps) = pattern!(r"\b(\d+)\s+Twists?\b").captures(text) {
        let base = i64::from(number(caps.get(1)));
        if let Some(m) = pattern!(r"\bplus (\d+)(?: twists?)? per player").captures(text) {
            let add = i64::from(number(m.get(1)));
            return Some(TwistCount::derived(base + add * players, format!("{base} + {add} per player")));
        }
        if let Some(m) = pattern!(r"\bminus (\d+)(?: twists?)? per player").captures(text) {
            let sub = i64::from(number(m.get(1)));
            return Some(TwistCount::derived(base - sub * players, format!("{base} - {sub} per player")));
        }
        return Some(TwistCount::flat(number(caps.get(1))));
    }

    tracing::trace!("no twist pattern matched");
    None
}
