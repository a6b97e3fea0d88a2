use std::rc::Rc;

use anyhow::{bail, Context, Result};
use e2d_assets::atlas::Atlases;
use e2d_core::IdAllocator;
use e2d_input::{matches, KeyTrigger, PlatformEvent, Trigger};
use log::info;
use nalgebra::vector;

/// Loads a sprite sheet and prints its grid.
///
/// `cargo run --example atlas_query -- hero.png 16 16`
fn main() -> Result<()> {
    env_logger::init();

    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let [path, w, h] = args.as_slice() else {
        bail!("usage: atlas_query <image.png> <sprite width> <sprite height>");
    };
    let cell = vector![
        w.parse::<u32>().context("invalid sprite width")?,
        h.parse::<u32>().context("invalid sprite height")?
    ];

    let ids = Rc::new(IdAllocator::new());
    let mut atlases = Atlases::new(ids.clone());
    let atlas = atlases.load(path, cell)?;

    let player = ids.next();
    atlases.bind_entity(player, atlas);

    for state in 0..atlases.animation_states(atlas).unwrap_or_default() {
        let frames = (0..atlases.frames_in_state(atlas, state).unwrap_or_default())
            .filter_map(|idx| atlases.sprite(atlas, state, idx))
            .map(|r| format!("({}, {}, {}, {})", r.x, r.y, r.w, r.h))
            .collect::<Vec<_>>();
        println!("state {state}: {}", frames.join(" "));
    }

    // Pretend the platform layer asked to close the window right away
    let quit: Trigger<char> = KeyTrigger::press('q').into();
    let events = [PlatformEvent::Other, PlatformEvent::Closed];
    if events
        .iter()
        .any(|e| matches(&quit, e) || matches(&Trigger::WindowClose, e))
    {
        info!("Entities bound to atlas {atlas}: {:?}", atlases.bound_entities(atlas));
    }

    Ok(())
}
