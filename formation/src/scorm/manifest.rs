// FICHIER : formation/src/scorm/manifest.rs
//
// Génération du manifest IMS (imsmanifest.xml) décrivant la build comme un
// SCO unique, pour le parcours complet ou pour un seul module. Reconstruit
// entièrement à chaque invocation depuis le listing du dossier de build.

use chrono::{DateTime, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::path::{Path, PathBuf};

use crate::catalog::{self, TrainingModule};
use crate::utils::error::{AppError, Result};
use crate::utils::fs;

/// Identité du paquet, reprise du parcours capitaine 2026.
pub const COURSE_IDENTIFIER: &str = "decathlon-formation-capitaine-2026";
pub const COURSE_TITLE: &str = "Fin du paiement par chèque – Formation Capitaine";
pub const COURSE_DESCRIPTION: &str =
    "Module e-learning Decathlon sur la fin du paiement par chèque.";

/// Fichier de lancement attendu à la racine du paquet.
pub const LAUNCH_FILE: &str = "index.html";
/// Nom du manifest, imposé par le standard à la racine du paquet.
pub const MANIFEST_FILE: &str = "imsmanifest.xml";

/// Descripteur transitoire d'un manifest, construit à chaque génération.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDescriptor {
    pub identifier: String,
    pub organization_id: String,
    pub resource_id: String,
    pub title: String,
    pub description: String,
    pub launch_href: String,
}

impl ManifestDescriptor {
    /// Descripteur du parcours complet.
    pub fn course() -> Self {
        Self {
            identifier: COURSE_IDENTIFIER.to_string(),
            organization_id: format!("{COURSE_IDENTIFIER}-org"),
            resource_id: format!("{COURSE_IDENTIFIER}-resource"),
            title: COURSE_TITLE.to_string(),
            description: COURSE_DESCRIPTION.to_string(),
            launch_href: LAUNCH_FILE.to_string(),
        }
    }

    /// Descripteur restreint à un module : identifiants suffixés, titre et
    /// description du module, href de lancement avec sélecteur de module.
    /// C'est ce qui permet de repackager une même build par module sans
    /// recompilation.
    pub fn for_module(module: &TrainingModule) -> Self {
        let base = format!("{COURSE_IDENTIFIER}-{}", module.module_id);
        Self {
            organization_id: format!("{base}-org"),
            resource_id: format!("{base}-resource"),
            identifier: base,
            title: module.title.to_string(),
            description: module.description.to_string(),
            launch_href: format!("{LAUNCH_FILE}?module={}", module.module_id),
        }
    }
}

/// Génère le manifest décrivant `root_dir` et l'écrit sur disque.
///
/// Préconditions fatales : `root_dir` doit être un dossier existant contenant
/// `index.html` à sa racine, et `module_id` doit résoudre dans le catalogue.
/// Une build cassée ne doit jamais produire silencieusement un paquet
/// inutilisable.
///
/// Sans `out_file`, le manifest est écrit à `<root_dir>/imsmanifest.xml`.
pub async fn generate_manifest(
    root_dir: &Path,
    out_file: Option<&Path>,
    module_id: Option<&str>,
) -> Result<PathBuf> {
    if !fs::is_dir(root_dir).await {
        return Err(AppError::Config(format!(
            "Le dossier de build {} n'existe pas. Lance d'abord la build du site client.",
            root_dir.display()
        )));
    }

    let descriptor = match module_id {
        Some(id) => {
            let module = catalog::module_by_id(id)
                .ok_or_else(|| AppError::NotFound(format!("module inconnu : {id}")))?;
            ManifestDescriptor::for_module(module)
        }
        None => ManifestDescriptor::course(),
    };

    let files = fs::list_files_relative(root_dir)?;
    if !files.iter().any(|f| f == LAUNCH_FILE) {
        return Err(AppError::Manifest(format!(
            "Le fichier {LAUNCH_FILE} est introuvable dans {}. Vérifie ta build client.",
            root_dir.display()
        )));
    }

    let xml = render_manifest(&descriptor, &files, Utc::now())?;

    let out_path = match out_file {
        Some(p) => p.to_path_buf(),
        None => root_dir.join(MANIFEST_FILE),
    };
    fs::write(&out_path, xml).await?;

    tracing::info!(manifest = %out_path.display(), "Manifest SCORM généré");
    Ok(out_path)
}

fn wmap<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Manifest(format!("écriture XML : {e}"))
}

/// Rend le document XML. Le writer de quick-xml échappe textes et attributs,
/// les contenus français (titres, descriptions) ne peuvent donc pas casser
/// le document. Seul l'horodatage de génération varie entre deux exécutions
/// sur les mêmes entrées.
pub fn render_manifest(
    descriptor: &ManifestDescriptor,
    files: &[String],
    generated_at: DateTime<Utc>,
) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(wmap)?;

    let mut manifest = BytesStart::new("manifest");
    manifest.push_attribute(("identifier", descriptor.identifier.as_str()));
    manifest.push_attribute(("version", "1.0"));
    manifest.push_attribute(("xmlns", "http://www.imsproject.org/xsd/imscp_rootv1p1p2"));
    manifest.push_attribute(("xmlns:adlcp", "http://www.adlnet.org/xsd/adlcp_rootv1p2"));
    manifest.push_attribute(("xmlns:imsmd", "http://www.imsglobal.org/xsd/imsmd_rootv1p2p1"));
    manifest.push_attribute(("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"));
    manifest.push_attribute((
        "xsi:schemaLocation",
        "http://www.imsproject.org/xsd/imscp_rootv1p1p2 https://www.imsglobal.org/xsd/imscp_rootv1p1p2.xsd \
         http://www.adlnet.org/xsd/adlcp_rootv1p2 https://www.adlnet.gov/adlxml.xsd \
         http://www.imsglobal.org/xsd/imsmd_rootv1p2p1 https://www.imsglobal.org/xsd/imsmd_rootv1p2p1.xsd",
    ));
    writer.write_event(Event::Start(manifest)).map_err(wmap)?;

    // --- <metadata> : bloc LOM avec titre, description et date de génération ---
    writer
        .write_event(Event::Start(BytesStart::new("metadata")))
        .map_err(wmap)?;
    writer
        .write_event(Event::Start(BytesStart::new("imsmd:lom")))
        .map_err(wmap)?;
    writer
        .write_event(Event::Start(BytesStart::new("imsmd:general")))
        .map_err(wmap)?;

    write_lom_string(&mut writer, "imsmd:title", &descriptor.title)?;
    let description = format!(
        "{} Généré le {}.",
        descriptor.description,
        generated_at.to_rfc3339()
    );
    write_lom_string(&mut writer, "imsmd:description", &description)?;

    writer
        .write_event(Event::End(BytesEnd::new("imsmd:general")))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new("imsmd:lom")))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new("metadata")))
        .map_err(wmap)?;

    // --- <organizations> : une seule organisation, un seul item ---
    let mut organizations = BytesStart::new("organizations");
    organizations.push_attribute(("default", descriptor.organization_id.as_str()));
    writer
        .write_event(Event::Start(organizations))
        .map_err(wmap)?;

    let mut organization = BytesStart::new("organization");
    organization.push_attribute(("identifier", descriptor.organization_id.as_str()));
    organization.push_attribute(("structure", "hierarchical"));
    writer
        .write_event(Event::Start(organization))
        .map_err(wmap)?;

    write_text_element(&mut writer, "title", &descriptor.title)?;

    let mut item = BytesStart::new("item");
    let item_id = format!("{}-item", descriptor.identifier);
    item.push_attribute(("identifier", item_id.as_str()));
    item.push_attribute(("identifierref", descriptor.resource_id.as_str()));
    item.push_attribute(("isvisible", "true"));
    writer.write_event(Event::Start(item)).map_err(wmap)?;
    write_text_element(&mut writer, "title", &descriptor.title)?;
    writer
        .write_event(Event::End(BytesEnd::new("item")))
        .map_err(wmap)?;

    writer
        .write_event(Event::End(BytesEnd::new("organization")))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new("organizations")))
        .map_err(wmap)?;

    // --- <resources> : un seul SCO, liste de fichiers exhaustive ---
    writer
        .write_event(Event::Start(BytesStart::new("resources")))
        .map_err(wmap)?;

    let mut resource = BytesStart::new("resource");
    resource.push_attribute(("identifier", descriptor.resource_id.as_str()));
    resource.push_attribute(("type", "webcontent"));
    resource.push_attribute(("adlcp:scormtype", "sco"));
    resource.push_attribute(("href", descriptor.launch_href.as_str()));
    writer.write_event(Event::Start(resource)).map_err(wmap)?;

    for file in files {
        let mut file_el = BytesStart::new("file");
        file_el.push_attribute(("href", file.as_str()));
        writer.write_event(Event::Empty(file_el)).map_err(wmap)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new("resource")))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new("resources")))
        .map_err(wmap)?;

    writer
        .write_event(Event::End(BytesEnd::new("manifest")))
        .map_err(wmap)?;

    let mut xml = String::from_utf8(writer.into_inner())
        .map_err(|e| AppError::Manifest(format!("document non UTF-8 : {e}")))?;
    xml.push('\n');
    Ok(xml)
}

/// `<imsmd:xxx><imsmd:string language="fr">texte</imsmd:string></imsmd:xxx>`
fn write_lom_string(writer: &mut Writer<Vec<u8>>, element: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(element)))
        .map_err(wmap)?;
    let mut string_el = BytesStart::new("imsmd:string");
    string_el.push_attribute(("language", "fr"));
    writer.write_event(Event::Start(string_el)).map_err(wmap)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new("imsmd:string")))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new(element)))
        .map_err(wmap)?;
    Ok(())
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, element: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(element)))
        .map_err(wmap)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(wmap)?;
    writer
        .write_event(Event::End(BytesEnd::new(element)))
        .map_err(wmap)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fs as ufs;

    fn sample_files() -> Vec<String> {
        vec![
            "assets/app.css".to_string(),
            "assets/app.js".to_string(),
            "index.html".to_string(),
        ]
    }

    #[test]
    fn test_course_descriptor_launch_href() {
        let descriptor = ManifestDescriptor::course();
        assert_eq!(descriptor.launch_href, "index.html");
        assert_eq!(descriptor.identifier, COURSE_IDENTIFIER);
    }

    #[test]
    fn test_module_descriptor_launch_href() {
        let module = crate::catalog::module_by_id("etape-02").unwrap();
        let descriptor = ManifestDescriptor::for_module(module);
        assert_eq!(descriptor.launch_href, "index.html?module=etape-02");
        assert_eq!(
            descriptor.identifier,
            "decathlon-formation-capitaine-2026-etape-02"
        );
        assert_eq!(descriptor.title, module.title);
    }

    #[test]
    fn test_rendered_manifest_lists_every_file() {
        let xml = render_manifest(&ManifestDescriptor::course(), &sample_files(), Utc::now())
            .expect("rendu du manifest");

        for file in sample_files() {
            assert!(
                xml.contains(&format!("<file href=\"{file}\"/>")),
                "fichier absent du manifest : {file}"
            );
        }
        assert!(xml.contains("adlcp:scormtype=\"sco\""));
        assert!(xml.contains("type=\"webcontent\""));
    }

    #[test]
    fn test_rendered_manifest_escapes_xml_text() {
        let mut descriptor = ManifestDescriptor::course();
        descriptor.title = "Posture & réflexes <clés>".to_string();

        let xml = render_manifest(&descriptor, &sample_files(), Utc::now()).unwrap();
        assert!(xml.contains("Posture &amp; réflexes &lt;clés&gt;"));
        assert!(!xml.contains("Posture & réflexes <clés>"));
    }

    #[test]
    fn test_rendered_manifest_is_stable_except_timestamp() {
        let at = Utc::now();
        let a = render_manifest(&ManifestDescriptor::course(), &sample_files(), at).unwrap();
        let b = render_manifest(&ManifestDescriptor::course(), &sample_files(), at).unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_generate_manifest_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let result = generate_manifest(&dir.path().join("fantome"), None, None).await;
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_generate_manifest_missing_launch_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        ufs::write(dir.path().join("assets/app.js"), "x")
            .await
            .unwrap();
        let result = generate_manifest(dir.path(), None, None).await;
        assert!(matches!(result, Err(AppError::Manifest(_))));
    }

    #[tokio::test]
    async fn test_generate_manifest_unknown_module_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        ufs::write(dir.path().join("index.html"), "<html></html>")
            .await
            .unwrap();
        let result = generate_manifest(dir.path(), None, Some("etape-99")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_generate_manifest_writes_at_root_by_default() {
        let dir = tempfile::tempdir().unwrap();
        ufs::write(dir.path().join("index.html"), "<html></html>")
            .await
            .unwrap();

        let path = generate_manifest(dir.path(), None, Some("etape-02"))
            .await
            .unwrap();
        assert_eq!(path, dir.path().join(MANIFEST_FILE));

        let xml = ufs::read_to_string(&path).await.unwrap();
        assert!(xml.contains("href=\"index.html?module=etape-02\""));
    }
}
