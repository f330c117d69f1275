use slide_common::GenerationRequest;

/// Build the user message asking the model for a JSON deck outline.
pub fn build_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Create a professional presentation outline about: {topic}
Follow these requirements:
- Total slides: {slides}
- Points per slide: {points}
- Structure in this JSON format:
{{
    "title": "Presentation Title",
    "slides": [
        {{
            "title": "Slide Title",
            "content": ["Point 1", "Point 2", "Point 3"]
        }}
    ]
}}
Include these elements:
1. Introduction slide
2. Key concept slides
3. Real-world examples
4. Conclusion slide
Keep content concise and professional."#,
        topic = request.topic(),
        slides = request.slide_count(),
        points = request.points_per_slide(),
    )
}
