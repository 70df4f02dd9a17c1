//! Fixed-rate simulation tick
//!
//! One call advances every entity by one frame, in a fixed order:
//!
//! 1. oscillating platforms
//! 2. collectibles (pickup test)
//! 3. hazards (contact test)
//! 4. enemies (move, land, contact test)
//! 5. the player
//! 6. level completion
//!
//! Pickups, hazards and enemies are tested against the player's position
//! from the previous tick, before the player moves. That one-tick lag is
//! part of the deterministic behavior and must not be "fixed".

use super::state::{DamageCause, GameEvent, GamePhase, Session};
use crate::input::InputState;

/// Advance the session by one tick. Does nothing unless playing.
pub fn tick(state: &mut Session, input: &InputState) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // 1. Platforms move first so riders are carried by this tick's step
    for platform in &mut state.level.platforms {
        platform.advance();
    }

    // 2. Collectibles
    let points = state.tuning.coin.points;
    for (index, coin) in state.level.collectibles.iter_mut().enumerate() {
        coin.update();
        if coin.try_collect(&state.player.body) {
            state.score += points;
            log::debug!("Coin {index} collected, score {}", state.score);
            state.events.push(GameEvent::CoinCollected {
                index,
                score: state.score,
            });
        }
    }

    // 3. Hazards
    let burned = state
        .level
        .hazards
        .iter()
        .any(|hazard| hazard.contacts(&state.player.body));
    if burned && state.damage_player(DamageCause::Hazard) && !still_playing(state) {
        return;
    }

    // 4. Enemies
    let level = &mut state.level;
    for enemy in &mut level.enemies {
        enemy.update(&level.platforms, &state.tuning.enemy);
    }
    let bitten = state
        .level
        .enemies
        .iter()
        .any(|enemy| enemy.contacts(&state.player.body));
    if bitten && state.damage_player(DamageCause::Enemy) && !still_playing(state) {
        return;
    }

    // 5. Player
    let fell = state
        .player
        .begin_tick(input, &state.tuning.player, &state.tuning.world);
    if fell && state.damage_player(DamageCause::FellOff) && !still_playing(state) {
        return;
    }
    state.player.finish_tick(&state.level.platforms);

    // 6. Completion
    if state.level.is_complete() {
        state.complete_level();
    }
}

/// A terminal transition mid-tick ends the tick
#[inline]
fn still_playing(state: &Session) -> bool {
    state.phase == GamePhase::Playing
}
