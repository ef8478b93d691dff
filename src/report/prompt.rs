//! src/report/prompt.rs

use serde_json::Value;

/// Kind of report requested. Unknown or missing values select `Generic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    StudentPerformance,
    CourseOutcome,
    FacultySummary,
    Compliance,
    #[default]
    #[serde(other)]
    Generic,
}

impl ReportType {
    /// Any value that is not a known report name selects `Generic`,
    /// including non-string values.
    pub fn from_json(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::StudentPerformance => "student-performance",
            ReportType::CourseOutcome => "course-outcome",
            ReportType::FacultySummary => "faculty-summary",
            ReportType::Compliance => "compliance",
            ReportType::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Pick the prompt pair for `report_type` and embed `data` as indented JSON.
pub fn build_prompt(report_type: ReportType, data: &Value) -> Prompt {
    let data = format!("{:#}", data);
    let (system, user) = match report_type {
        ReportType::StudentPerformance => (
            "You are an academic report generator. Create comprehensive student performance \
            reports based on attendance and marks data. Include insights, trends, and \
            recommendations.",
            format!(
                "Generate a detailed performance report for the following student data:\n\n\
                {data}\n\n\
                Include:\n\
                1. Overall performance summary\n\
                2. Attendance analysis\n\
                3. Subject-wise performance\n\
                4. Areas of improvement\n\
                5. Recommendations"
            ),
        ),
        ReportType::CourseOutcome => (
            "You are an academic report generator specializing in course outcome analysis. \
            Analyze course performance and provide insights for improvement.",
            format!(
                "Generate a course outcome report based on this data:\n\n\
                {data}\n\n\
                Include:\n\
                1. Overall course performance\n\
                2. Student achievement analysis\n\
                3. Learning outcome assessment\n\
                4. Suggestions for course improvement"
            ),
        ),
        ReportType::FacultySummary => (
            "You are an academic report generator creating faculty performance summaries. \
            Analyze teaching effectiveness and student outcomes.",
            format!(
                "Generate a faculty summary report:\n\n\
                {data}\n\n\
                Include:\n\
                1. Teaching effectiveness\n\
                2. Student performance trends\n\
                3. Course management efficiency\n\
                4. Areas of excellence and improvement"
            ),
        ),
        ReportType::Compliance => (
            "You are an expert in NAAC/AICTE compliance documentation. Generate professional \
            compliance reports with proper formatting and required metrics.",
            format!(
                "Generate a compliance report for institutional documentation:\n\n\
                {data}\n\n\
                Format according to NAAC/AICTE standards and include all required metrics \
                and documentation references."
            ),
        ),
        ReportType::Generic => (
            "You are an academic report generator. Create professional reports based on the \
            provided data.",
            format!("Generate a report based on this data:\n\n{data}"),
        ),
    };
    Prompt {
        system: system.to_string(),
        user,
    }
}
