use std::path::PathBuf;

/// 临时保存的上传附件，请求结束后删除
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub path: PathBuf,
    pub file_name: String,
}

/// `POST /tests/generate` 的 multipart 表单字段
#[derive(Debug)]
pub struct GenerateTestForm {
    pub title: String,
    pub resource_description: String,
    pub num_questions: usize,
    pub standards: Option<String>,
    pub file: Option<UploadedFile>,
}

/// `POST /tests/{id}/generate-more` 的 multipart 表单字段
#[derive(Debug)]
pub struct GenerateMoreForm {
    pub num_questions: usize,
    pub file: Option<UploadedFile>,
}
