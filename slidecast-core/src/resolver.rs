//! Default resolution: turns a raw [`Slide`] into a [`ResolvedSlide`].
//!
//! Every function here is pure. Fallback is decided per field, so a slide
//! may override `avatars.man.static` and still inherit `avatars.man.animated`.

use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::model::{
    AvatarPair, DefaultConfig, ResolvedSlide, ResolvedSubtitleLine, Role, Slide, SubtitleLine,
};

/// Index into the default background list for a 1-based slide number.
///
/// Slide 1 maps to index 0 and the list wraps around. `None` when the list
/// is empty.
pub fn background_index(number: u32, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(number.saturating_sub(1) as usize % len)
}

pub fn resolve_background(slide: &Slide, defaults: &DefaultConfig) -> Result<String, ConfigError> {
    if let Some(bg) = &slide.background {
        return Ok(bg.clone());
    }
    background_index(slide.number, defaults.default_backgrounds.len())
        .map(|idx| defaults.default_backgrounds[idx].clone())
        .ok_or(ConfigError::EmptyBackgrounds { slide: slide.number })
}

pub fn resolve_avatar(
    slide: &Slide,
    role: &str,
    defaults: &DefaultConfig,
) -> Result<AvatarPair, ConfigError> {
    let over = slide.avatar_override(role);
    let fallback = Role::from_name(role).map(|r| defaults.default_avatars.get(r));

    let static_image = over
        .and_then(|o| o.static_image.clone())
        .or_else(|| fallback.map(|f| f.static_image.clone()));
    let animated = over
        .and_then(|o| o.animated.clone())
        .or_else(|| fallback.map(|f| f.animated.clone()));

    match (static_image, animated) {
        (Some(static_image), Some(animated)) => Ok(AvatarPair { static_image, animated }),
        _ => Err(ConfigError::UnknownRole {
            slide: slide.number,
            role: role.to_string(),
        }),
    }
}

pub fn resolve_subtitle_duration(line: &SubtitleLine, defaults: &DefaultConfig) -> u64 {
    match line.duration {
        Some(ms) if ms > 0 => ms as u64,
        _ => defaults.default_subtitle_duration,
    }
}

pub fn resolve_slide(slide: &Slide, defaults: &DefaultConfig) -> Result<ResolvedSlide, ConfigError> {
    let background = resolve_background(slide, defaults)?;

    // Both actors always get avatars; extra roles only when the slide names them.
    let mut roles: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
    roles.extend(slide.avatars.iter().flat_map(|a| a.keys().map(String::as_str)));

    let mut avatars = BTreeMap::new();
    for role in roles {
        if !avatars.contains_key(role) {
            avatars.insert(role.to_string(), resolve_avatar(slide, role, defaults)?);
        }
    }

    let subtitles = slide
        .subtitles
        .iter()
        .map(|(role, lines)| {
            let resolved = lines
                .iter()
                .map(|line| ResolvedSubtitleLine {
                    text: line.text.clone(),
                    duration: resolve_subtitle_duration(line, defaults),
                })
                .collect();
            (role.clone(), resolved)
        })
        .collect();

    Ok(ResolvedSlide {
        number: slide.number,
        background,
        avatars,
        audio: slide.audio.clone(),
        subtitles,
    })
}
