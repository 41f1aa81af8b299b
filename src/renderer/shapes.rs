//! Shape generation for 2D primitives

use super::frame::Sprite;
use super::vertex::Vertex;

/// Two triangles covering a sprite's (possibly rotated) bounds
pub fn sprite_quad(sprite: &Sprite) -> [Vertex; 6] {
    let color = sprite.kind.color();
    let [tl, tr, br, bl] = sprite.corners();

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Triangle-list vertices for a whole batch of sprites
pub fn sprite_batch(sprites: &[Sprite]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(sprites.len() * 6);
    for sprite in sprites {
        vertices.extend_from_slice(&sprite_quad(sprite));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::frame::SpriteKind;
    use glam::Vec2;

    #[test]
    fn test_quad_spans_scaled_texture() {
        let sprite = Sprite::new(SpriteKind::Ground, Vec2::new(10.0, 550.0), 1.0);
        let quad = sprite_quad(&sprite);
        let xs: Vec<f32> = quad.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = quad.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 346.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 550.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 662.0);
        assert!(quad.iter().all(|v| v.color == SpriteKind::Ground.color()));
    }

    #[test]
    fn test_batch_len() {
        let sprites = [
            Sprite::new(SpriteKind::Background, Vec2::ZERO, 1.33),
            Sprite::new(SpriteKind::Bird, Vec2::new(100.0, 100.0), 1.33),
        ];
        assert_eq!(sprite_batch(&sprites).len(), 12);
    }
}
