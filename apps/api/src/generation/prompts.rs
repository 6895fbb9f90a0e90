// All completion prompt constants for the Generation module.
// Templates are pure string substitution: replace the {placeholders} before
// sending. Assembly lives in `generation::assembly`.

/// System prompt for cover letter drafting.
pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter writer.";

/// Cover letter prompt template.
/// Replace: {job_description}, {requirements}, {responsibilities}, {user_bio}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Job Description: {job_description}

Requirements:
{requirements}

Responsibilities:
{responsibilities}

User Bio: {user_bio}

Generate a professional cover letter for the above job, tailored to the user's bio. Address the specific requirements and responsibilities if provided. The cover letter should include:
- A personalized greeting.
- An engaging introduction that mentions the job title and the company.
- A brief summary of the user's relevant experience and skills that match the job requirements.
- Specific examples or achievements from the user's past roles that demonstrate their qualifications.
- An explanation of why the user is excited about this role and how they can contribute to the company's success.
- A professional closing statement with a call to action.
- Proper formatting and a respectful tone throughout.
- Word limit 200."#;

/// System prompt for ATS compatibility analysis.
pub const ATS_SYSTEM: &str = "You are an applicant tracking system (ATS) analyst. \
    You evaluate how well a resume matches a job description.";

/// ATS report prompt template.
/// Replace: {job_description}, {resume_text}, {education}, {experience}
pub const ATS_PROMPT_TEMPLATE: &str = r#"Job Description: {job_description}

Resume:
{resume_text}

Education section:
{education}

Experience section:
{experience}

Rate this resume's ATS compatibility with the job description as a score from 0 to 100, then give concise feedback:
- Which keywords from the job description the resume already covers.
- Which important keywords are missing.
- Concrete wording changes that would improve the match.
Start your answer with "ATS score: <number>/100"."#;

/// Substituted for an empty requirements or responsibilities list.
pub const NOT_SPECIFIED_FALLBACK: &str = "Not specified in the job description.";

/// Substituted for a resume section whose keywords never appeared.
pub const SECTION_NOT_FOUND_FALLBACK: &str = "Not found in the resume.";

/// Substituted when PDF extraction produced no text at all.
pub const RESUME_TEXT_FALLBACK: &str = "No text could be extracted from the resume.";
