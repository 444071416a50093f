//! Colour-group media reconciliation.
//!
//! Images are attached to individual variants but meant to be shared by every
//! variant of the same colour, so usually only one size per colour carries the
//! files. Reconciliation runs in two passes: [`media_by_color`] picks the best
//! media per colour, then [`reconcile_color_media`] fills gaps from it.

use std::collections::HashMap;

use crate::view::VariantView;

/// Best-known media of one colour group.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColorMedia {
    pub image: Option<String>,
    pub gallery: Vec<String>,
}

/// Pass 1: colour → best media.
///
/// The first contribution for a colour is kept unless a later one has a
/// strictly longer gallery (ties keep the earlier one). A later contribution
/// can still supply a missing image without replacing the gallery. Variants
/// with neither image nor gallery contribute nothing.
pub fn media_by_color(variants: &[VariantView]) -> HashMap<String, ColorMedia> {
    let mut groups: HashMap<String, ColorMedia> = HashMap::new();

    for v in variants {
        let gallery: Vec<String> = v
            .gallery_images
            .iter()
            .filter(|url| !url.is_empty())
            .cloned()
            .collect();
        let image = v
            .image
            .clone()
            .filter(|url| !url.is_empty())
            .or_else(|| gallery.first().cloned());
        if image.is_none() && gallery.is_empty() {
            continue;
        }

        match groups.get_mut(&v.color) {
            None => {
                groups.insert(v.color.clone(), ColorMedia { image, gallery });
            }
            Some(existing) if gallery.len() > existing.gallery.len() => {
                *existing = ColorMedia { image, gallery };
            }
            Some(existing) => {
                if existing.image.is_none() && image.is_some() {
                    existing.image = image;
                }
            }
        }
    }

    groups
}

/// Pass 2: a variant without a gallery inherits its colour's gallery; a
/// variant without an image takes the colour's image, else the first entry of
/// its (possibly inherited) gallery. Order is preserved.
pub fn reconcile_color_media(variants: Vec<VariantView>) -> Vec<VariantView> {
    let groups = media_by_color(&variants);
    tracing::trace!(colors = groups.len(), "colour media groups built");

    variants
        .into_iter()
        .map(|mut v| {
            let Some(media) = groups.get(&v.color) else {
                return v;
            };
            if v.gallery_images.is_empty() && !media.gallery.is_empty() {
                v.gallery_images = media.gallery.clone();
            }
            if v.image.as_deref().is_none_or(str::is_empty) {
                v.image = media
                    .image
                    .clone()
                    .or_else(|| v.gallery_images.first().cloned());
            }
            v
        })
        .collect()
}
