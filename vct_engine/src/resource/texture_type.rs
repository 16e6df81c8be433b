/// Semantic roles a texture can serve in the shading model
///
/// The roles match the material slots produced by the model importer. A
/// texture carries a set of roles so the renderer can decide where to bind
/// it (diffuse slot, normal map slot, ...).

use bitflags::bitflags;

/// A single semantic role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextureType {
    None,
    Diffuse,
    Specular,
    Ambient,
    Emissive,
    Height,
    Normals,
    Shininess,
    Opacity,
    Displacement,
    Lightmap,
    Reflection,
    Unknown,
}

impl TextureType {
    /// Every role, in declaration order
    pub const ALL: [TextureType; 13] = [
        TextureType::None,
        TextureType::Diffuse,
        TextureType::Specular,
        TextureType::Ambient,
        TextureType::Emissive,
        TextureType::Height,
        TextureType::Normals,
        TextureType::Shininess,
        TextureType::Opacity,
        TextureType::Displacement,
        TextureType::Lightmap,
        TextureType::Reflection,
        TextureType::Unknown,
    ];

    /// The flag of this role in a `TextureTypes` set
    pub fn flag(self) -> TextureTypes {
        match self {
            TextureType::None => TextureTypes::NONE,
            TextureType::Diffuse => TextureTypes::DIFFUSE,
            TextureType::Specular => TextureTypes::SPECULAR,
            TextureType::Ambient => TextureTypes::AMBIENT,
            TextureType::Emissive => TextureTypes::EMISSIVE,
            TextureType::Height => TextureTypes::HEIGHT,
            TextureType::Normals => TextureTypes::NORMALS,
            TextureType::Shininess => TextureTypes::SHININESS,
            TextureType::Opacity => TextureTypes::OPACITY,
            TextureType::Displacement => TextureTypes::DISPLACEMENT,
            TextureType::Lightmap => TextureTypes::LIGHTMAP,
            TextureType::Reflection => TextureTypes::REFLECTION,
            TextureType::Unknown => TextureTypes::UNKNOWN,
        }
    }
}

bitflags! {
    /// Set of semantic roles
    ///
    /// `NONE` is the "untyped" role tag, not the empty set. Use
    /// `TextureTypes::empty()` for a texture with no roles.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextureTypes: u16 {
        const NONE = 1 << 0;
        const DIFFUSE = 1 << 1;
        const SPECULAR = 1 << 2;
        const AMBIENT = 1 << 3;
        const EMISSIVE = 1 << 4;
        const HEIGHT = 1 << 5;
        const NORMALS = 1 << 6;
        const SHININESS = 1 << 7;
        const OPACITY = 1 << 8;
        const DISPLACEMENT = 1 << 9;
        const LIGHTMAP = 1 << 10;
        const REFLECTION = 1 << 11;
        const UNKNOWN = 1 << 12;
    }
}

impl TextureTypes {
    /// Whether the set contains a role
    pub fn has(&self, texture_type: TextureType) -> bool {
        self.contains(texture_type.flag())
    }

    /// Add a role to the set
    pub fn add(&mut self, texture_type: TextureType) {
        self.insert(texture_type.flag());
    }

    /// Roles in the set, in declaration order
    pub fn types(&self) -> impl Iterator<Item = TextureType> + '_ {
        TextureType::ALL.into_iter().filter(move |t| self.has(*t))
    }
}

impl From<TextureType> for TextureTypes {
    fn from(texture_type: TextureType) -> Self {
        texture_type.flag()
    }
}

impl FromIterator<TextureType> for TextureTypes {
    fn from_iter<I: IntoIterator<Item = TextureType>>(iter: I) -> Self {
        iter.into_iter().fold(TextureTypes::empty(), |set, t| set | t.flag())
    }
}

#[cfg(test)]
#[path = "texture_type_tests.rs"]
mod tests;
