use crate::{
    constants::*,
    terminal::{Style, StyleId, Stylus},
};
use anyhow::Error;
use itertools::Itertools;
use std::{
    fs,
    io::{stdin, Read},
    path::{Path, PathBuf},
};

pub(crate) fn stylus(color: bool) -> Stylus {
    let mut stylus = Stylus::new();
    if color {
        stylus.insert_style(
            STYLE_LOGO,
            Style::new().foreground(59).attribute(term::Attr::Dim),
        );
        stylus.insert_style(
            STYLE_INFO,
            Style::new().foreground(59).attribute(term::Attr::Bold),
        );
        stylus.insert_style(STYLE_CONDITION, Style::new().foreground(252));
        stylus.insert_style(STYLE_EXPRESSION, Style::new().foreground(110));
        stylus.insert_style(
            STYLE_FRAGMENT,
            Style::new().foreground(252).attribute(term::Attr::Bold),
        );
    }

    stylus
}

pub(crate) fn read_condition_from_file(path: &Path) -> Result<String, Error> {
    let mut f = fs::File::open(path)
        .map_err(|e| Error::new(e).context("failed to find the input file"))?;

    let mut contents = String::new();
    f.read_to_string(&mut contents)
        .map_err(|e| Error::new(e).context("failed to read the input file"))?;

    Ok(contents)
}

pub(crate) fn read_condition_from_stdin() -> Result<String, Error> {
    let mut buf: Vec<u8> = Vec::new();
    stdin().read_to_end(&mut buf)?;
    let s = String::from_utf8(buf)?;
    Ok(s)
}

pub(crate) fn fragment_file_name(number: usize) -> String {
    format!(
        "{}{}.{}",
        FRAGMENT_FILE_PREFIX, number, FRAGMENT_FILE_EXTENSION
    )
}

fn is_fragment_file(path: &Path) -> bool {
    let extension = path.extension().and_then(|e| e.to_str());
    let stem = path.file_stem().and_then(|s| s.to_str());
    match (stem, extension) {
        (Some(stem), Some(FRAGMENT_FILE_EXTENSION)) => stem
            .strip_prefix(FRAGMENT_FILE_PREFIX)
            .map_or(false, |n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit())),
        _ => false,
    }
}

/// Writes every fragment to its own file in `dir`, after removing the fragment files of an
/// earlier run. Returns the paths of the written files, in fragment order.
pub(crate) fn save_fragments(dir: &Path, fragments: &[String]) -> Result<Vec<PathBuf>, Error> {
    fs::create_dir_all(dir)
        .map_err(|e| Error::new(e).context("failed to create the output directory"))?;

    let stale = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file() && is_fragment_file(path))
        .collect_vec();
    for path in stale {
        fs::remove_file(&path)
            .map_err(|e| Error::new(e).context("failed to remove a previous fragment file"))?;
    }

    fragments
        .iter()
        .enumerate()
        .map(|(i, fragment)| {
            let path = dir.join(fragment_file_name(i + 1));
            fs::write(&path, fragment)
                .map_err(|e| Error::new(e).context("failed to write a fragment file"))?;
            Ok::<_, Error>(path)
        })
        .collect()
}

pub(crate) fn print_fragment(fragment: &str, stylus: &Stylus, count: &mut usize) {
    *count += 1;

    stylus.set(STYLE_INFO);
    println!("{}.", count);

    stylus.set(STYLE_FRAGMENT);
    println!("{}", fragment);

    stylus.set(STYLE_INFO);
    println!("\n- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -");
}

pub(crate) fn print_section(title: &str, body: &str, style: StyleId, stylus: &Stylus) {
    stylus.set(STYLE_INFO);
    println!("{}:", title);

    stylus.set(style);
    println!("{}", body);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ccl-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_fragment_file_name() {
        assert_eq!("DSL_S1.ccl", fragment_file_name(1));
        assert_eq!("DSL_S12.ccl", fragment_file_name(12));
    }

    #[test]
    fn test_is_fragment_file() {
        assert!(is_fragment_file(Path::new("out/DSL_S3.ccl")));
        assert!(!is_fragment_file(Path::new("out/DSL_S.ccl")));
        assert!(!is_fragment_file(Path::new("out/DSL_S3.txt")));
        assert!(!is_fragment_file(Path::new("out/checker.ccl")));
    }

    #[test]
    fn test_save_fragments() {
        let dir = scratch_dir("save");
        let fragments = vec![
            "NOT { ('A') }".to_string(),
            "NOT { ('B') }".to_string(),
            "NOT { ('C') }".to_string(),
        ];
        let paths = save_fragments(&dir, &fragments).unwrap();
        assert_eq!(3, paths.len());
        assert_eq!(
            "NOT { ('B') }",
            fs::read_to_string(dir.join("DSL_S2.ccl")).unwrap()
        );

        fs::write(dir.join("checker.ccl"), "('A')").unwrap();
        save_fragments(&dir, &fragments[..1]).unwrap();
        assert!(dir.join("DSL_S1.ccl").exists());
        assert!(!dir.join("DSL_S2.ccl").exists());
        assert!(!dir.join("DSL_S3.ccl").exists());
        assert!(dir.join("checker.ccl").exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_condition_from_file() {
        let dir = scratch_dir("read");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("checker.ccl");
        fs::write(&path, "AND { ('A'), ('B') }").unwrap();
        assert_eq!(
            "AND { ('A'), ('B') }",
            read_condition_from_file(&path).unwrap()
        );
        assert!(read_condition_from_file(&dir.join("missing.ccl")).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
