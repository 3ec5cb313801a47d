use anyhow::{bail, Context, Result};
use log::info;
use std::path::{Path, PathBuf};

use crate::mesh::{CpuMesh, Vertex};

/// Decoded RGBA8 texture data
#[derive(Debug, Clone)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Enumerate regular files in `dir` with the given extension
///
/// Directory order is whatever the filesystem yields - consistent within
/// one run, which is all index-based selection relies on.
fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("read directory: {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("read directory: {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            paths.push(path);
        }
    }
    Ok(paths)
}

/// Load every `.obj` mesh in the directory, in enumeration order
pub fn load_models(dir: &Path) -> Result<Vec<CpuMesh>> {
    let mut meshes = Vec::new();
    for path in files_with_extension(dir, "obj")? {
        let input = std::fs::read_to_string(&path)
            .with_context(|| format!("read OBJ: {}", path.display()))?;
        let mesh = parse_obj(&input).with_context(|| format!("parse OBJ: {}", path.display()))?;
        info!(
            "loaded model {} ({} vertices, {} indices), index {}",
            path.display(),
            mesh.vertices.len(),
            mesh.indices.len(),
            meshes.len() + 1
        );
        meshes.push(mesh);
    }
    if meshes.is_empty() {
        bail!("no .obj models found in {}", dir.display());
    }
    Ok(meshes)
}

/// Load every `.png` texture in the directory, in enumeration order
pub fn load_textures(dir: &Path) -> Result<Vec<TextureImage>> {
    let mut textures = Vec::new();
    for path in files_with_extension(dir, "png")? {
        let bytes =
            std::fs::read(&path).with_context(|| format!("read PNG: {}", path.display()))?;
        let texture =
            decode_png(&bytes).with_context(|| format!("decode PNG: {}", path.display()))?;
        info!(
            "loaded texture {} ({}x{}), index {}",
            path.display(),
            texture.width,
            texture.height,
            textures.len() + 1
        );
        textures.push(texture);
    }
    if textures.is_empty() {
        bail!("no .png textures found in {}", dir.display());
    }
    Ok(textures)
}

/// Parse Wavefront OBJ text into a triangulated single-index mesh
///
/// Missing normals fall back to +Y, missing texcoords to (0, 0). The V
/// coordinate is flipped from OBJ's bottom-left origin to wgpu's top-left.
pub fn parse_obj(input: &str) -> Result<CpuMesh> {
    let load_opts = tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ..Default::default()
    };
    let (models, _materials) = tobj::load_obj_buf(&mut input.as_bytes(), &load_opts, |_| {
        Ok((Vec::new(), Default::default()))
    })
    .context("tobj parse")?;
    if models.is_empty() {
        bail!("no meshes in OBJ input");
    }

    let mut vertices: Vec<Vertex> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();
    for model in models {
        let mesh = model.mesh;
        let pos = mesh.positions;
        let nrm = mesh.normals;
        let uvs = mesh.texcoords;

        let vcount = pos.len() / 3;
        let base = vertices.len() as u32;
        for i in 0..vcount {
            let p = [pos[3 * i], pos[3 * i + 1], pos[3 * i + 2]];
            let n = if nrm.len() >= 3 * (i + 1) {
                [nrm[3 * i], nrm[3 * i + 1], nrm[3 * i + 2]]
            } else {
                [0.0, 1.0, 0.0]
            };
            let uv = if uvs.len() >= 2 * (i + 1) {
                [uvs[2 * i], 1.0 - uvs[2 * i + 1]]
            } else {
                [0.0, 0.0]
            };
            vertices.push(Vertex {
                pos: p,
                nrm: n,
                uv,
            });
        }

        if mesh.indices.is_empty() {
            indices.extend(base..base + vcount as u32);
        } else {
            indices.extend(mesh.indices.iter().map(|&i| base + i));
        }
    }

    Ok(CpuMesh { vertices, indices })
}

/// Decode PNG bytes to tightly packed RGBA8
pub fn decode_png(bytes: &[u8]) -> Result<TextureImage> {
    let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .context("image decode")?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(TextureImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
