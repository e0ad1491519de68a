use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};

use crate::assets::source::DecodedImage;
use crate::prelude::HashMap;

/// GPU textures for the preloaded artwork, keyed by image URL.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, TextureHandle>,
}

impl TextureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload `image` unless `url` already has a texture.
    pub fn insert(&mut self, ctx: &Context, url: &str, image: &DecodedImage) -> TextureId {
        if let Some(handle) = self.textures.get(url) {
            return handle.id();
        }

        let color_image = ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
        let handle = ctx.load_texture(format!("resortmap:{url}"), color_image, TextureOptions::LINEAR);
        let id = handle.id();
        self.textures.insert(url.to_string(), handle);
        id
    }

    pub fn upload_all<'a>(
        &mut self,
        ctx: &Context,
        images: impl IntoIterator<Item = (&'a String, &'a DecodedImage)>,
    ) {
        for (url, image) in images {
            self.insert(ctx, url, image);
        }
        log::debug!("{} layer textures resident", self.textures.len());
    }

    pub fn get(&self, url: &str) -> Option<TextureId> {
        self.textures.get(url).map(TextureHandle::id)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
