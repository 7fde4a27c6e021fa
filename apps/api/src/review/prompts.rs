// Prompt constants for the review flows.

/// Persona for resume review.
pub const RESUME_PERSONA: &str = "You are an expert AI Resume Analyzer and Career Coach.";

/// Resume feedback prompt.
/// Replace: {target_role_line}, {resume_text}
pub const RESUME_PROMPT_TEMPLATE: &str = r#"Analyze the provided resume text thoroughly.
{target_role_line}

Resume Text:
{resume_text}

Provide a comprehensive, constructive and actionable review:
1. "overallScore": 0-100. Consider clarity, impact, relevance to the target role (if any) and professional standards.
2. "summary": 2-3 sentences with the key findings.
3. "strengths": 2-4 specific strengths.
4. "areasForImprovement": 3-5 specific, actionable suggestions. Each names the resume "section" (e.g. "Experience", "Skills", "Education", "Projects", "Contact Information", "Summary/Objective"), the "suggestion" itself and optionally an "importance" of "High", "Medium" or "Low".
5. "formattingAndStructureFeedback": 2-3 points on formatting, layout and readability (consistency, white space, length, clarity of sections).
6. "atsFriendliness": optional but encouraged. Comment on Applicant Tracking System compatibility: keyword relevance if a target role is given, otherwise general parseability.

Be balanced: highlight positives as well as areas for growth.

Return a JSON object with this schema:
{
  "overallScore": 72,
  "summary": "string",
  "strengths": ["string"],
  "areasForImprovement": [
    {"section": "Experience", "suggestion": "string", "importance": "High"}
  ],
  "formattingAndStructureFeedback": ["string"],
  "atsFriendliness": "string, optional"
}"#;

pub const TARGET_ROLE_LINE: &str =
    "The user is targeting a role as a '{target_role}'. Tailor your feedback towards this role.";
pub const NO_TARGET_ROLE_LINE: &str =
    "No specific target role provided, so give general feedback for a professional resume.";

/// Persona for code analysis.
pub const CODE_PERSONA: &str = "You are an expert AI Coding Assistant and Code Execution Simulator.";

/// Code analysis prompt.
/// Replace: {language}, {language_note}, {code_snippet}
pub const CODE_PROMPT_TEMPLATE: &str = r#"You are given a code snippet in '{language}'. Analyze it and provide comprehensive feedback.

Code Snippet:
```{language}
{code_snippet}
```

Provide:
1. "explanation": what the code does, its main purpose, the logic flow and key operations.
2. "simulatedOutput": if the snippet is executable and has clear output (console.log, print, a SQL query returning rows), give a realistic simulated output. For complex or non-runnable code describe the expected outcome or data transformation. For SQL describe the result set and give a small illustrative sample. Omit if no output is expected.
3. "suggestions": improvements for clarity, efficiency or readability, potential bugs or unhandled edge cases, best practices for the language, alternatives, security considerations. Omit if there is nothing to suggest.
4. "isExecutable": true if the snippet looks complete and runnable, false if it is a fragment, pseudo-code or needs broader context. Best effort; omit if unsure.

{language_note}
Be concise yet thorough.

Return a JSON object with this schema:
{
  "explanation": "string",
  "simulatedOutput": "string, optional",
  "suggestions": "string, optional",
  "isExecutable": true
}"#;

pub const UNKNOWN_LANGUAGE: &str = "unspecified language";
pub const GUESS_LANGUAGE_NOTE: &str =
    "No language was specified. Make a best guess based on the syntax.";
