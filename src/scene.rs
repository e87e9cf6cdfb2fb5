//! Scene loading and saving
//!
//! Scenes are authored in RON (Rusty Object Notation): declared tag names
//! plus a list of entity definitions. Files on disk may be plain text or
//! brotli-compressed.
//! - Reading: auto-detects the format by checking for a RON start byte
//! - Writing: always compresses with brotli
//!
//! This is the configuration layer, and the only place malformed
//! configuration is rejected. The domain types trust their inputs.

use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::hypertag::{Hypertag, TagLibrary};
use crate::math::Vec2;
use crate::movement::{InputSource, MovementXY};
use crate::variable::VariableInstance;
use crate::world::{Entity, World};

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum declared tags per scene
    pub const MAX_TAGS: usize = 256;
    /// Maximum entities per scene
    pub const MAX_ENTITIES: usize = 4096;
    /// Maximum tag references on one entity
    pub const MAX_TAGS_PER_ENTITY: usize = 32;
    /// Maximum length for names and bindings
    pub const MAX_NAME_LEN: usize = 256;
    /// Maximum length for free-form descriptions
    pub const MAX_DESC_LEN: usize = 1024;
    /// Maximum coordinate or speed magnitude
    pub const MAX_COORD: f32 = 1_000_000.0;
}

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
    Validation(String),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::Io(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::Parse(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::Serialize(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::Io(e) => write!(f, "IO error: {}", e),
            SceneError::Parse(e) => write!(f, "Parse error: {}", e),
            SceneError::Serialize(e) => write!(f, "Serialize error: {}", e),
            SceneError::Validation(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// A scene definition: tag declarations plus entities to spawn.
///
/// Tags are declared once by display name and referenced by that name
/// from entities. Instantiation mints one identity per declared name, so
/// two loads of the same file produce unrelated tag identities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneDef {
    /// Tag display names, one identity minted per entry
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub entities: Vec<EntityDef>,
}

/// One entity to spawn: placement plus optional components.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityDef {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub position: Vec2,
    /// Rotation in degrees
    #[serde(default)]
    pub rotation: f32,
    /// References into the scene's declared tag names
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub variable: Option<VariableInstance>,
    #[serde(default)]
    pub movement: Option<MovementXY>,
}

/// Check if a float is a usable coordinate (not NaN/Inf, sane magnitude)
fn is_valid_coord(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

fn validate_variable(var: &VariableInstance, context: &str) -> Result<(), String> {
    if !var.current_value.is_finite() || !var.default_value.is_finite() {
        return Err(format!(
            "{}: variable values must be finite ({}, {})",
            context, var.current_value, var.default_value
        ));
    }
    if var.min_value.is_nan() || var.max_value.is_nan() {
        return Err(format!("{}: variable limits must not be NaN", context));
    }
    if var.has_limits {
        if var.min_value > var.max_value {
            return Err(format!(
                "{}: min_value {} above max_value {}",
                context, var.min_value, var.max_value
            ));
        }
        if var.is_integer
            && (var.min_value.fract() != 0.0 || var.max_value.fract() != 0.0)
        {
            return Err(format!(
                "{}: integer variable needs integral limits ({}, {})",
                context, var.min_value, var.max_value
            ));
        }
    }
    Ok(())
}

fn validate_movement(mover: &MovementXY, context: &str) -> Result<(), String> {
    let speed = mover.speed();
    if !is_valid_coord(speed.x) || !is_valid_coord(speed.y) {
        return Err(format!("{}: invalid speed {}", context, speed));
    }

    let check_name = |name: &str, what: &str| -> Result<(), String> {
        if name.len() > limits::MAX_NAME_LEN {
            return Err(format!(
                "{}: {} binding too long ({} > {})",
                context,
                what,
                name.len(),
                limits::MAX_NAME_LEN
            ));
        }
        Ok(())
    };

    match &mover.input {
        InputSource::Axis {
            horizontal,
            vertical,
        } => {
            check_name(horizontal, "horizontal axis")?;
            check_name(vertical, "vertical axis")?;
        }
        InputSource::Buttons {
            horizontal_positive,
            horizontal_negative,
            vertical_positive,
            vertical_negative,
        } => {
            check_name(horizontal_positive, "horizontal positive button")?;
            check_name(horizontal_negative, "horizontal negative button")?;
            check_name(vertical_positive, "vertical positive button")?;
            check_name(vertical_negative, "vertical negative button")?;
        }
        InputSource::Keys { .. } => {}
    }
    Ok(())
}

fn validate_entity(
    def: &EntityDef,
    entity_idx: usize,
    declared: &HashMap<&str, usize>,
) -> Result<(), String> {
    let context = format!("entity[{}]", entity_idx);

    if def.name.len() > limits::MAX_NAME_LEN {
        return Err(format!(
            "{}: name too long ({} > {})",
            context,
            def.name.len(),
            limits::MAX_NAME_LEN
        ));
    }
    if def.description.len() > limits::MAX_DESC_LEN {
        return Err(format!(
            "{}: description too long ({} > {})",
            context,
            def.description.len(),
            limits::MAX_DESC_LEN
        ));
    }

    if !is_valid_coord(def.position.x) || !is_valid_coord(def.position.y) {
        return Err(format!("{}: invalid position {}", context, def.position));
    }
    if !is_valid_coord(def.rotation) {
        return Err(format!("{}: invalid rotation {}", context, def.rotation));
    }

    if def.tags.len() > limits::MAX_TAGS_PER_ENTITY {
        return Err(format!(
            "{}: too many tags ({} > {})",
            context,
            def.tags.len(),
            limits::MAX_TAGS_PER_ENTITY
        ));
    }
    for tag_name in &def.tags {
        if !declared.contains_key(tag_name.as_str()) {
            return Err(format!(
                "{}: references undeclared tag \"{}\"",
                context, tag_name
            ));
        }
    }

    if let Some(var) = &def.variable {
        validate_variable(var, &context)?;
    }
    if let Some(mover) = &def.movement {
        validate_movement(mover, &context)?;
    }

    Ok(())
}

/// Validate an entire scene definition
pub fn validate_scene(scene: &SceneDef) -> Result<(), SceneError> {
    if scene.tags.len() > limits::MAX_TAGS {
        return Err(SceneError::Validation(format!(
            "too many tags ({} > {})",
            scene.tags.len(),
            limits::MAX_TAGS
        )));
    }
    if scene.entities.len() > limits::MAX_ENTITIES {
        return Err(SceneError::Validation(format!(
            "too many entities ({} > {})",
            scene.entities.len(),
            limits::MAX_ENTITIES
        )));
    }

    let mut declared: HashMap<&str, usize> = HashMap::new();
    for (i, name) in scene.tags.iter().enumerate() {
        if name.len() > limits::MAX_NAME_LEN {
            return Err(SceneError::Validation(format!(
                "tag[{}]: name too long ({} > {})",
                i,
                name.len(),
                limits::MAX_NAME_LEN
            )));
        }
        if declared.insert(name.as_str(), i).is_some() {
            return Err(SceneError::Validation(format!(
                "tag[{}]: duplicate tag name \"{}\"",
                i, name
            )));
        }
    }

    for (i, def) in scene.entities.iter().enumerate() {
        validate_entity(def, i, &declared).map_err(SceneError::Validation)?;
    }

    Ok(())
}

impl SceneDef {
    /// Spawn the scene's entities into a world, minting one tag identity
    /// per declared name.
    ///
    /// Assumes a validated definition. References to undeclared tags are
    /// skipped with a warning rather than failing mid-spawn.
    pub fn instantiate(&self, world: &mut World, library: &mut TagLibrary) -> Vec<Entity> {
        let mut minted: HashMap<&str, Hypertag> = HashMap::new();
        for name in &self.tags {
            minted
                .entry(name.as_str())
                .or_insert_with(|| library.create(name.clone()));
        }

        let mut spawned = Vec::with_capacity(self.entities.len());
        for def in &self.entities {
            let mut resolved = Vec::new();
            for tag_name in &def.tags {
                match minted.get(tag_name.as_str()) {
                    Some(tag) => resolved.push(*tag),
                    None => log::warn!(
                        "entity \"{}\" references undeclared tag \"{}\"",
                        def.name,
                        tag_name
                    ),
                }
            }

            let entity = world.spawn_tagged(def.position, resolved);
            if let Some(transform) = world.transforms.get_mut(entity) {
                transform.rotation = def.rotation;
            }
            if let Some(set) = world.tag_sets.get_mut(entity) {
                set.description = def.description.clone();
            }
            if let Some(variable) = &def.variable {
                world.variables.insert(entity, variable.clone());
            }
            if let Some(movement) = &def.movement {
                world.movers.insert(entity, movement.clone());
            }
            spawned.push(entity);
        }

        log::debug!(
            "instantiated {} entities with {} declared tags",
            spawned.len(),
            self.tags.len()
        );
        spawned
    }
}

/// Load a scene from a RON file (plain or brotli-compressed)
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneDef, SceneError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;

    // Detect format: RON files start with '(' or whitespace, brotli is binary
    let is_plain_ron = bytes
        .first()
        .map(|&b| b == b'(' || b == b' ' || b == b'\n' || b == b'\r' || b == b'\t')
        .unwrap_or(false);

    let contents = if is_plain_ron {
        String::from_utf8(bytes).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8: {}", e),
            ))
        })?
    } else {
        let mut decompressed = Vec::new();
        brotli::BrotliDecompress(&mut Cursor::new(&bytes), &mut decompressed).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("brotli decompression failed: {}", e),
            ))
        })?;
        String::from_utf8(decompressed).map_err(|e| {
            SceneError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("invalid UTF-8 after decompression: {}", e),
            ))
        })?
    };

    let scene: SceneDef = match ron::from_str(&contents) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("RON parse error in {}: {}", path.display(), e);
            // Show the offending line for quick diagnosis
            let line_idx = e.position.line.saturating_sub(1);
            if let Some(line) = contents.lines().nth(line_idx) {
                log::warn!("  line {}: {}", e.position.line, line);
            }
            return Err(e.into());
        }
    };

    validate_scene(&scene)?;
    Ok(scene)
}

/// Save a scene to a brotli-compressed RON file
pub fn save_scene<P: AsRef<Path>>(scene: &SceneDef, path: P) -> Result<(), SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let ron_string = ron::ser::to_string_pretty(scene, config)?;

    // Quality 6, window 22: good balance of speed and ratio
    let mut compressed = Vec::new();
    brotli::BrotliCompress(
        &mut Cursor::new(ron_string.as_bytes()),
        &mut compressed,
        &brotli::enc::BrotliEncoderParams {
            quality: 6,
            lgwin: 22,
            ..Default::default()
        },
    )
    .map_err(|e| {
        SceneError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("brotli compression failed: {}", e),
        ))
    })?;

    fs::write(path, compressed)?;
    Ok(())
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<SceneDef, SceneError> {
    let scene: SceneDef = ron::from_str(s)?;
    validate_scene(&scene)?;
    Ok(scene)
}
