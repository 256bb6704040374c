// FICHIER : formation/src/utils/fs.rs

use crate::utils::error::{AppError, Result};

// --- RE-EXPORTS (Isolation de la couche OS) ---
pub use std::path::{Path, PathBuf};
pub use walkdir::WalkDir;

// --- LECTURE & ASYNC I/O ---
pub use tokio::fs::File;
pub use tokio::io::AsyncWriteExt;

/// Crée récursivement un répertoire.
pub async fn create_dir_all(path: impl AsRef<Path>) -> Result<()> {
    let p = path.as_ref();
    tokio::fs::create_dir_all(p).await.map_err(|e| {
        AppError::Config(format!(
            "Impossible de créer le dossier {} : {}",
            p.display(),
            e
        ))
    })
}

/// Copie récursivement un dossier complet.
pub async fn copy_dir_all(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let src = src.as_ref().to_path_buf();
    let dst = dst.as_ref().to_path_buf();

    if !tokio::fs::try_exists(&src).await.unwrap_or(false) {
        return Err(AppError::NotFound(format!(
            "Le dossier source {} n'existe pas",
            src.display()
        )));
    }

    if !tokio::fs::try_exists(&dst).await.unwrap_or(false) {
        tokio::fs::create_dir_all(&dst).await?;
    }

    let mut stack = vec![(src, dst)];

    while let Some((current_src, current_dst)) = stack.pop() {
        let mut entries = tokio::fs::read_dir(&current_src).await?;

        while let Some(entry) = entries.next_entry().await? {
            let entry_path = entry.path();
            let dest_path = current_dst.join(entry.file_name());

            if entry.file_type().await?.is_dir() {
                if !tokio::fs::try_exists(&dest_path).await.unwrap_or(false) {
                    tokio::fs::create_dir_all(&dest_path).await?;
                }
                stack.push((entry_path, dest_path));
            } else {
                tokio::fs::copy(&entry_path, &dest_path).await?;
            }
        }
    }
    Ok(())
}

pub async fn write(path: impl AsRef<Path>, contents: impl AsRef<[u8]>) -> Result<()> {
    let p = path.as_ref();
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(p, contents).await?;
    Ok(())
}

pub async fn read_to_string(path: impl AsRef<Path>) -> Result<String> {
    let p = path.as_ref();
    match tokio::fs::read_to_string(p).await {
        Ok(c) => Ok(c),
        Err(e) => Err(AppError::Io(std::io::Error::new(
            e.kind(),
            format!("{} ({})", e, p.display()),
        ))),
    }
}

pub async fn exists(path: &Path) -> bool {
    tokio::fs::metadata(path).await.is_ok()
}

pub async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

pub async fn remove_dir_all(path: &Path) -> Result<()> {
    if exists(path).await {
        tokio::fs::remove_dir_all(path).await?;
    }
    Ok(())
}

/// Liste récursivement tous les fichiers sous `root`, en chemins relatifs,
/// normalisés avec des `/` quel que soit l'OS hôte, triés pour un résultat stable.
pub fn list_files_relative(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|e| AppError::Config(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| AppError::Config(e.to_string()))?;
        let normalized = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        files.push(normalized);
    }

    files.sort();
    Ok(files)
}
