//! Frame geometry, image corner treatment and row alternation.

use serde::Serialize;
use story_model::StoryCard;

/// Geometry of the text column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFrameStyle {
    pub max_width_pct: f64,
    /// The column may grow past this.
    pub min_height_px: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl TextFrameStyle {
    pub fn transform(&self) -> String {
        translate(self.translate_x, self.translate_y)
    }
}

/// Geometry of the image frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFrameStyle {
    pub width_pct: f64,
    pub height_px: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl ImageFrameStyle {
    pub fn transform(&self) -> String {
        translate(self.translate_x, self.translate_y)
    }
}

/// Corner rounding applied to the image frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ImageCornerClass {
    /// All corners rounded alike.
    None,
    SingleLeft,
    SingleRight,
}

pub fn resolve_text_frame_style(card: &StoryCard) -> TextFrameStyle {
    let frame = &card.text_frame;
    TextFrameStyle {
        max_width_pct: frame.size.width,
        min_height_px: frame.size.height,
        translate_x: frame.position.x,
        translate_y: frame.position.y,
    }
}

pub fn resolve_image_frame_style(card: &StoryCard) -> ImageFrameStyle {
    let image = &card.image;
    ImageFrameStyle {
        width_pct: image.size.width,
        height_px: image.size.height,
        translate_x: image.position.x,
        translate_y: image.position.y,
    }
}

/// `cornerReversed` only matters when `singleCorner` is set.
pub fn resolve_image_corner_class(card: &StoryCard) -> ImageCornerClass {
    match (card.image.single_corner, card.image.corner_reversed) {
        (false, _) => ImageCornerClass::None,
        (true, false) => ImageCornerClass::SingleLeft,
        (true, true) => ImageCornerClass::SingleRight,
    }
}

/// Odd rows put the image on the left, even rows on the right.
pub fn resolve_row_side_is_image_left(index: usize) -> bool {
    index % 2 == 1
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({}px, {}px)", x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use story_model::{Coordinates, FrameSize};

    #[test]
    fn test_text_frame_style() {
        let card = StoryCard::default().update_text_frame(|frame| {
            frame.position = Coordinates::new(-15.0, 20.0);
            frame.size = FrameSize::new(90.0, 300.0);
        });
        let style = resolve_text_frame_style(&card);

        assert_eq!(style.max_width_pct, 90.0);
        assert_eq!(style.min_height_px, 300.0);
        assert_eq!(style.transform(), "translate(-15px, 20px)");
    }

    #[test]
    fn test_image_frame_style() {
        let card = StoryCard::default().update_image(|image| {
            image.position = Coordinates::new(4.5, 0.0);
            image.size = FrameSize::new(80.0, 420.0);
        });
        let style = resolve_image_frame_style(&card);

        assert_eq!(style.width_pct, 80.0);
        assert_eq!(style.height_px, 420.0);
        assert_eq!(style.transform(), "translate(4.5px, 0px)");
    }

    #[test]
    fn test_corner_class() {
        let plain = StoryCard::default();
        assert_eq!(resolve_image_corner_class(&plain), ImageCornerClass::None);

        let reversed_only = plain.clone().update_image(|i| i.corner_reversed = true);
        assert_eq!(resolve_image_corner_class(&reversed_only), ImageCornerClass::None);

        let single = plain.clone().update_image(|i| i.single_corner = true);
        assert_eq!(resolve_image_corner_class(&single), ImageCornerClass::SingleLeft);

        let mirrored = single.update_image(|i| i.corner_reversed = true);
        assert_eq!(resolve_image_corner_class(&mirrored), ImageCornerClass::SingleRight);
    }

    #[test]
    fn test_row_side_alternates() {
        for index in 0..=50 {
            assert_eq!(resolve_row_side_is_image_left(index), index % 2 == 1);
        }
        assert!(!resolve_row_side_is_image_left(0));
        assert!(resolve_row_side_is_image_left(1));
    }
}
