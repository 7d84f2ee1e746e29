use crate::error::{CvMatchError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 照合対象の履歴書ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    pub path: PathBuf,
    pub file_name: String,
}

impl CvFile {
    fn from_path(path: &Path) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path: path.to_path_buf(),
            file_name,
        }
    }
}

fn is_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

/// フォルダ直下（`recursive` ならサブフォルダも）のPDFを列挙
pub fn scan_folder(folder: &Path, recursive: bool) -> Result<Vec<CvFile>> {
    if !folder.exists() {
        return Err(CvMatchError::FolderNotFound(folder.display().to_string()));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };
    let mut files: Vec<CvFile> = WalkDir::new(folder)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file() && is_pdf_extension(e.path()))
        .map(|e| CvFile::from_path(e.path()))
        .collect();

    // ファイル名でソート
    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(files)
}

/// 引数（ファイルまたはフォルダ）を履歴書ファイル一覧に展開
///
/// 明示的に指定されたファイルは拡張子を問わず対象にする（読めなければ文書単位で失敗扱い）。
pub fn collect_cv_files(inputs: &[PathBuf], recursive: bool) -> Result<Vec<CvFile>> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            files.extend(scan_folder(input, recursive)?);
        } else if input.exists() {
            files.push(CvFile::from_path(input));
        } else {
            return Err(CvMatchError::FileNotFound(input.display().to_string()));
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_is_pdf_extension() {
        assert!(is_pdf_extension(Path::new("cv.pdf")));
        assert!(is_pdf_extension(Path::new("CV.PDF")));
        assert!(!is_pdf_extension(Path::new("cv.docx")));
        assert!(!is_pdf_extension(Path::new("pdf")));
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"), false);
        assert!(matches!(result, Err(CvMatchError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_folder_with_pdfs() {
        let temp_dir = tempfile::tempdir().unwrap();

        File::create(temp_dir.path().join("b.pdf")).unwrap().write_all(b"%PDF-").unwrap();
        File::create(temp_dir.path().join("a.PDF")).unwrap().write_all(b"%PDF-").unwrap();
        File::create(temp_dir.path().join("notes.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(temp_dir.path(), false).unwrap();
        let names: Vec<_> = result.iter().map(|f| f.file_name.as_str()).collect();
        assert_eq!(names, vec!["a.PDF", "b.pdf"]);
    }

    #[test]
    fn test_scan_folder_recursive() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");
        fs::create_dir_all(&nested).unwrap();
        File::create(temp_dir.path().join("top.pdf")).unwrap();
        File::create(nested.join("deep.pdf")).unwrap();

        assert_eq!(scan_folder(temp_dir.path(), false).unwrap().len(), 1);
        assert_eq!(scan_folder(temp_dir.path(), true).unwrap().len(), 2);
    }

    #[test]
    fn test_collect_mixed_inputs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let folder = temp_dir.path().join("cvs");
        fs::create_dir_all(&folder).unwrap();
        File::create(folder.join("x.pdf")).unwrap();
        let single = temp_dir.path().join("single.pdf");
        File::create(&single).unwrap();

        let files = collect_cv_files(&[single.clone(), folder], false).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, single);
        assert_eq!(files[1].file_name, "x.pdf");
    }

    #[test]
    fn test_collect_missing_file() {
        let result = collect_cv_files(&[PathBuf::from("/nonexistent/cv.pdf")], false);
        assert!(matches!(result, Err(CvMatchError::FileNotFound(_))));
    }
}
