//! Rotating "era" banner image.

pub const ERA_IMAGES: [&str; 3] = [
    "https://via.placeholder.com/600x400/ff6900/fff?text=60s+Staples",
    "https://via.placeholder.com/600x400/333/fff?text=Football+Style",
    "https://via.placeholder.com/600x400/666/fff?text=Functional+Footwear",
];

#[derive(Clone, Debug)]
pub struct BannerRotator {
    images: &'static [&'static str],
    index: usize,
}

impl Default for BannerRotator {
    fn default() -> Self {
        Self::new(&ERA_IMAGES)
    }
}

impl BannerRotator {
    pub fn new(images: &'static [&'static str]) -> Self {
        Self { images, index: 0 }
    }

    /// Move to the next image, wrapping at the end of the list.
    pub fn next_image(&mut self) -> Option<&'static str> {
        if self.images.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.images.len();
        Some(self.images[self.index])
    }
}
