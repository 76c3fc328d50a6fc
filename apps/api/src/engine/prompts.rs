// All prompt constants and builders for the engine's three operations.
// Builders are pure string functions — no state, no I/O.

/// Hard cap on résumé text embedded in the verbatim-extraction prompt.
/// Extraction is a structural pass, not an analysis — the cap bounds cost
/// and latency. Text beyond it is never seen by this operation.
pub const EXTRACTION_CHAR_LIMIT: usize = 4000;

/// Mode-instruction block substituted when no analysis feedback was given.
pub const DEFAULT_ANALYSIS_FEEDBACK: &str = "Fix general weaknesses found in the CV.";

/// Evaluation prompt. Replace `{job_desc}` and `{cv_text}` before sending.
/// Addresses the candidate in second person — the report is shown to them.
const EVALUATION_PROMPT_TEMPLATE: &str = r#"You are a Senior Technical Recruiter and CV Expert.
Analyze the following Candidate CV against the provided Job Description.
Always address the candidate as "You" — never "He" or "She".

JOB DESCRIPTION:
{job_desc}

CANDIDATE CV CONTENT:
{cv_text}

Perform a deep analysis based on these 6 criteria:

1. **Candidate Overview**:
   - Extract the candidate's full name.
   - Give an overall score (0-100).
   - Provide detailed feedback for the overall score, covering strengths and weaknesses.

2. **Writing Style (Score 0-100)**:
   - Check clarity, grammar, and typos.
   - Flag weak phrasing (excessive passive voice) versus action-oriented language.

3. **CV Format & ATS (Score 0-100)**:
   - Is the format ATS-friendly? (Clean structure, standard fonts.)
   - Is it machine-readable?

4. **Skill Match (Score 0-100)**:
   - How well do the hard skills and soft skills match the Job Description?

5. **Experience & Projects (Score 0-100)**:
   - Are the work history and projects relevant?
   - Does the seniority level match?

6. **Keyword Relevance (Score 0-100)**:
   - List the primary selling points (strengths).
   - List critical gaps or missing elements.

*** REQUIRED JSON OUTPUT FORMAT ***
You MUST output strictly JSON matching the EvaluationReport schema."#;

/// Verbatim-extraction prompt. Replace `{cv_text}` (pre-truncated) before
/// sending. The model acts as a parser, never an editor.
const EXTRACTION_PROMPT_TEMPLATE: &str = r#"You are a strict data parser.
Extract the following CV text into a structured JSON document matching the NormalizedResume schema.

RULES:
1. DO NOT rewrite, improve, or change the content. Extract it exactly as is.
2. If a field is missing, use an empty string "" or an empty list [].

CV TEXT:
{cv_text}

OUTPUT SCHEMA: NormalizedResume (JSON)"#;

/// Rewrite prompt. Replace `{mode_instruction}` and `{cv_text}`.
const REWRITE_PROMPT_TEMPLATE: &str = r#"You are an Elite Resume Writer (Top 1%). Rewrite this CV to be world-class.

{mode_instruction}

*** WRITING RULES ***
1. **Summary:** 3-4 sentences, high impact. Format: "[Title] with [Years] exp... Expert in [Skills]..."
2. **Experience:** Use the XYZ formula ("Accomplished X, measured by Y, by doing Z").
   - Start bullets with power verbs (Spearheaded, Engineered).
   - **Quantify results:** Add numbers or metrics to every bullet point possible.

ORIGINAL CV:
{cv_text}

OUTPUT: Return strictly JSON (NormalizedResume schema)."#;

/// Mode block for job-description targeting. Replace `{job_desc}`.
const JOB_DESC_MODE_TEMPLATE: &str = r#"*** MODE: JOB DESCRIPTION TARGETING ***
TARGET JOB: {job_desc}
INSTRUCTIONS:
- ATS Optimization: Inject keywords from the Target Job into Summary & Skills.
- Relevance: Prioritize experiences matching the job duties."#;

/// Mode block for analysis-driven weakness fixing. Replace `{feedback}`.
const ANALYSIS_MODE_TEMPLATE: &str = r#"*** MODE: WEAKNESS FIXING (BASED ON ANALYSIS) ***
ANALYSIS FEEDBACK: {feedback}
INSTRUCTIONS:
- Fix Gaps: Add missing skills identified in the feedback where logical.
- Fix Metrics: If the feedback flags a lack of numbers, add estimated metrics (e.g. "Increased X by ~20%")."#;

/// Builds the evaluation prompt. Neither input is truncated.
pub fn build_evaluation_prompt(cv_text: &str, job_desc: &str) -> String {
    EVALUATION_PROMPT_TEMPLATE
        .replace("{job_desc}", job_desc)
        .replace("{cv_text}", cv_text)
}

/// Builds the verbatim-extraction prompt from at most the first
/// `EXTRACTION_CHAR_LIMIT` characters of the document.
pub fn build_extraction_prompt(cv_text: &str) -> String {
    let truncated: String = cv_text.chars().take(EXTRACTION_CHAR_LIMIT).collect();
    EXTRACTION_PROMPT_TEMPLATE.replace("{cv_text}", &truncated)
}

/// Builds the rewrite prompt around a mode-instruction block. The full
/// document text is embedded — rewriting needs everything.
pub fn build_rewrite_prompt(cv_text: &str, mode_instruction: &str) -> String {
    REWRITE_PROMPT_TEMPLATE
        .replace("{mode_instruction}", mode_instruction)
        .replace("{cv_text}", cv_text)
}

/// Mode block for `job_desc` rewrites.
pub fn job_desc_mode_instruction(job_desc: &str) -> String {
    JOB_DESC_MODE_TEMPLATE.replace("{job_desc}", job_desc)
}

/// Mode block for `analysis` rewrites. Absent feedback substitutes the
/// fixed default instruction.
pub fn analysis_mode_instruction(feedback: Option<&str>) -> String {
    ANALYSIS_MODE_TEMPLATE.replace("{feedback}", feedback.unwrap_or(DEFAULT_ANALYSIS_FEEDBACK))
}
