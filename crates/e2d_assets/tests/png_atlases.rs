use std::{path::PathBuf, rc::Rc};

use e2d_assets::atlas::{Atlases, LoadError};
use e2d_core::IdAllocator;
use e2d_geometry::SpriteRect;
use nalgebra::vector;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_png(dir: &TempDir, name: &str, w: usize, h: usize) -> PathBuf {
    let path = dir.path().join(name);
    let pixels = vec![255u8; w * h * 4];
    lodepng::encode32_file(&path, &pixels, w, h).unwrap();
    path
}

fn atlases() -> (Rc<IdAllocator>, Atlases) {
    let ids = Rc::new(IdAllocator::new());
    (ids.clone(), Atlases::new(ids))
}

#[test]
fn test_load_png() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "hero.png", 64, 64);
    let (_, mut atlases) = atlases();

    let id = atlases.load(&path, vector![16, 16]).unwrap();

    assert!(atlases.is_valid_atlas(id));
    assert_eq!(atlases.texture(id).map(|t| t.size), Some(vector![64, 64]));
    assert_eq!(atlases.texture(id).map(|t| t.pixels.len()), Some(64 * 64 * 4));
    assert_eq!(atlases.animation_states(id), Some(4));
    assert_eq!(atlases.frames_in_state(id, 3), Some(4));
    assert_eq!(atlases.sprite(id, 2, 3), Some(SpriteRect::new(48, 32, 16, 16)));
    assert_eq!(atlases.sprite(id, 4, 0), None);
    assert_eq!(atlases.sprite(id, 0, 4), None);
}

#[test]
fn test_load_uneven_png() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "uneven.png", 50, 20);
    let (_, mut atlases) = atlases();

    let id = atlases.load(&path, vector![16, 16]).unwrap();

    assert_eq!(atlases.animation_states(id), Some(2));
    assert_eq!(atlases.frames_in_state(id, 0), Some(4));
    assert_eq!(atlases.frames_in_state(id, 1), Some(4));
    assert_eq!(atlases.sprite(id, 1, 3), Some(SpriteRect::new(48, 16, 16, 16)));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let (_, mut atlases) = atlases();

    let result = atlases.load(dir.path().join("missing.png"), vector![16, 16]);

    assert!(matches!(result, Err(LoadError::Texture { .. })));
    assert_eq!(atlases.atlas_count(), 0);
    assert!(atlases.index().is_empty());
}

#[test]
fn test_unsupported_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hero.png");
    std::fs::write(&path, b"definitely not a png").unwrap();
    let (_, mut atlases) = atlases();

    let result = atlases.load(&path, vector![16, 16]);

    assert!(matches!(result, Err(LoadError::Texture { .. })));
    assert_eq!(atlases.atlas_count(), 0);
}

#[test]
fn test_zero_cell_size() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "hero.png", 64, 64);
    let (_, mut atlases) = atlases();

    assert!(atlases.load(&path, vector![0, 16]).is_err());
    assert!(atlases.load(&path, vector![16, 0]).is_err());

    assert_eq!(atlases.atlas_count(), 0);
    assert!(atlases.index().is_empty());
}

#[test]
fn test_bind_entities() {
    let dir = TempDir::new().unwrap();
    let path = write_png(&dir, "hero.png", 32, 32);
    let (ids, mut atlases) = atlases();

    let hero = atlases.load(&path, vector![16, 16]).unwrap();
    let player = ids.next();

    assert!(atlases.bind_entity(player, hero));
    assert!(!atlases.bind_entity(player, ids.next()));
    assert_eq!(atlases.bound_entities(hero), &[player]);
    assert_eq!(atlases.bindings_count(), 1);
}

#[test]
fn test_load_tiled_tileset() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("images")).unwrap();
    write_png(&dir, "images/terrain.png", 72, 54);
    let tileset = dir.path().join("terrain.tsj");
    std::fs::write(
        &tileset,
        r#"{
            "columns": 4,
            "image": "images/terrain.png",
            "imageheight": 54,
            "imagewidth": 72,
            "margin": 1,
            "name": "terrain",
            "spacing": 2,
            "tilecount": 10,
            "tileheight": 16,
            "tilewidth": 16,
            "type": "tileset"
        }"#,
    )
    .unwrap();
    let (_, mut atlases) = atlases();

    let id = atlases.load_tiled_tileset(&tileset).unwrap();

    assert_eq!(atlases.animation_states(id), Some(3));
    assert_eq!(atlases.frames_in_state(id, 2), Some(2));
    assert_eq!(atlases.sprite(id, 1, 1), Some(SpriteRect::new(19, 19, 16, 16)));
    assert_eq!(atlases.sprite_by_tile_id(id, 9), Some(SpriteRect::new(19, 37, 16, 16)));
    assert_eq!(atlases.sprite_by_tile_id(id, 10), None);
}

#[test]
fn test_tiled_tileset_failures() {
    let dir = TempDir::new().unwrap();
    let (_, mut atlases) = atlases();

    let missing = atlases.load_tiled_tileset(dir.path().join("missing.tsj"));
    assert!(matches!(missing, Err(LoadError::Io { .. })));

    let malformed = dir.path().join("malformed.tsj");
    std::fs::write(&malformed, "{ \"columns\": ").unwrap();
    let malformed = atlases.load_tiled_tileset(&malformed);
    assert!(matches!(malformed, Err(LoadError::Tileset { .. })));

    let no_image = dir.path().join("no_image.tsj");
    std::fs::write(
        &no_image,
        r#"{"image": "gone.png", "imagewidth": 32, "imageheight": 32,
            "tilewidth": 16, "tileheight": 16, "tilecount": 4, "columns": 2}"#,
    )
    .unwrap();
    let no_image = atlases.load_tiled_tileset(&no_image);
    assert!(matches!(no_image, Err(LoadError::Texture { .. })));

    let out_of_range = dir.path().join("out_of_range.tsj");
    std::fs::write(
        &out_of_range,
        r#"{"image": "gone.png", "imagewidth": 32, "imageheight": 32,
            "tilewidth": 2147483648, "tileheight": 16, "margin": 2147483648,
            "tilecount": 2, "columns": 2}"#,
    )
    .unwrap();
    let out_of_range = atlases.load_tiled_tileset(&out_of_range);
    assert!(matches!(out_of_range, Err(LoadError::InvalidCellSize { .. })));

    let empty = dir.path().join("empty.tsj");
    std::fs::write(
        &empty,
        r#"{"image": "gone.png", "imagewidth": 32, "imageheight": 32,
            "tilewidth": 16, "tileheight": 16, "tilecount": 0, "columns": 2}"#,
    )
    .unwrap();
    let empty = atlases.load_tiled_tileset(&empty);
    assert!(matches!(empty, Err(LoadError::InvalidCellSize { .. })));

    assert_eq!(atlases.atlas_count(), 0);
    assert!(atlases.index().is_empty());
}
