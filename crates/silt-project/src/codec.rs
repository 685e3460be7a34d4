//! Binary encode/decode for the project-file format.
//!
//! All integers are little-endian. Strings and value arrays are
//! length-prefixed with a `u32` count. The format is intentionally simple:
//! no compression, no alignment padding, no self-describing schema.

use std::io::{Read, Write};

use silt_core::Entity;

use crate::error::ProjectError;

// ── Record tags ─────────────────────────────────────────────────

/// Solution record: 3D grid coordinates.
pub const REC_GRID3D: u8 = 1;
/// Solution record: step open, carries the time value.
pub const REC_STEP_BEGIN: u8 = 2;
/// Solution record: named real field over one entity family.
pub const REC_REAL_FIELD: u8 = 3;
/// Solution record: named integer field over one entity family.
pub const REC_INTEGER_FIELD: u8 = 4;
/// Solution record: particle group open, carries the group name.
pub const REC_PARTICLE_BEGIN: u8 = 5;
/// Solution record: particle group 3D position.
pub const REC_PARTICLE_POSITION: u8 = 6;
/// Solution record: named real particle channel.
pub const REC_PARTICLE_REAL: u8 = 7;
/// Solution record: particle group close.
pub const REC_PARTICLE_END: u8 = 8;
/// Solution record: step close.
pub const REC_STEP_END: u8 = 9;

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), ProjectError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), ProjectError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i64.
pub fn write_i64_le(w: &mut dyn Write, v: i64) -> Result<(), ProjectError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), ProjectError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a length-prefixed UTF-8 string (u32 length + bytes).
pub fn write_str(w: &mut dyn Write, s: &str) -> Result<(), ProjectError> {
    write_u32_le(w, s.len() as u32)?;
    w.write_all(s.as_bytes())?;
    Ok(())
}

/// Write a length-prefixed f64 array (u32 count + values).
pub fn write_f64_slice(w: &mut dyn Write, values: &[f64]) -> Result<(), ProjectError> {
    write_u32_le(w, values.len() as u32)?;
    for &v in values {
        w.write_all(&v.to_le_bytes())?;
    }
    Ok(())
}

/// Write a length-prefixed i32 array (u32 count + values).
pub fn write_i32_slice(w: &mut dyn Write, values: &[i32]) -> Result<(), ProjectError> {
    write_u32_le(w, values.len() as u32)?;
    for &v in values {
        w.write_all(&v.to_le_bytes())?;
    }
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, ProjectError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, ProjectError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian i64.
pub fn read_i64_le(r: &mut dyn Read) -> Result<i64, ProjectError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(i64::from_le_bytes(buf))
}

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, ProjectError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a length-prefixed UTF-8 string.
pub fn read_str(r: &mut dyn Read) -> Result<String, ProjectError> {
    let len = read_u32_le(r)? as usize;
    let mut buf = vec![0u8; len];
    r.read_exact(&mut buf)?;
    String::from_utf8(buf).map_err(|e| ProjectError::MalformedRecord {
        detail: format!("invalid UTF-8 string: {e}"),
    })
}

/// Read a length-prefixed f64 array.
pub fn read_f64_slice(r: &mut dyn Read) -> Result<Vec<f64>, ProjectError> {
    let count = read_u32_le(r)? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(read_f64_le(r)?);
    }
    Ok(out)
}

/// Read a length-prefixed i32 array.
pub fn read_i32_slice(r: &mut dyn Read) -> Result<Vec<i32>, ProjectError> {
    let count = read_u32_le(r)? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let mut buf = [0u8; 4];
        r.read_exact(&mut buf)?;
        out.push(i32::from_le_bytes(buf));
    }
    Ok(out)
}

// ── Entity tags ─────────────────────────────────────────────────

/// One-byte wire tag for an entity family.
pub fn entity_tag(family: Entity) -> u8 {
    match family {
        Entity::Node => 0,
        Entity::Cell => 1,
        Entity::IFace => 2,
        Entity::JFace => 3,
        Entity::KFace => 4,
    }
}

/// Decode an entity family from its wire tag.
pub fn entity_from_tag(tag: u8) -> Result<Entity, ProjectError> {
    match tag {
        0 => Ok(Entity::Node),
        1 => Ok(Entity::Cell),
        2 => Ok(Entity::IFace),
        3 => Ok(Entity::JFace),
        4 => Ok(Entity::KFace),
        _ => Err(ProjectError::MalformedRecord {
            detail: format!("unknown entity tag {tag}"),
        }),
    }
}
