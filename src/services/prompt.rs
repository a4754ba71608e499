use crate::models::{RankingMode, UserPreferences};

const MISSING: &str = "(미입력)";
const NONE: &str = "(없음)";

/// Builds the text handed to an external language model
///
/// Pure template substitution. Every preference field appears in the output
/// whether or not the reader filled it in.
pub fn build_prompt(prefs: &UserPreferences, mode: RankingMode, recent_years: i32) -> String {
    let recency = if prefs.recent_only {
        format!("최근 {}년만", recent_years)
    } else {
        "제한 없음".to_string()
    };

    let lines = [
        "아래 사용자의 선호를 반영해 실제로 존재하는 책만 5권 이내로 추천해 주세요.".to_string(),
        format!("- 모드: {}", mode_text(mode)),
        "- 실수/환각 방지: 존재 불명/오탈자 제목 금지, 세부 수치(페이지/ISBN/가격) 추정 금지".to_string(),
        "- 민감 콘텐츠는 '기피 요소'를 기준으로 제외".to_string(),
        "- 각 추천에 2–3줄 근거(장르/톤/테마 중심, 스포일러 금지)".to_string(),
        "- 다양성: 동일 작가/시리즈 과도 반복 금지".to_string(),
        "- 언어 표기는 원제 병기 가능, 한글 응답".to_string(),
        format!("- 최신성 필터: {}", recency),
        String::new(),
        "[사용자 입력]".to_string(),
        format!("• 선호 장르: {}", join_or(&prefs.genres, MISSING)),
        format!(
            "• 선호 톤: {}",
            prefs.tone.map(|t| t.label()).unwrap_or(MISSING)
        ),
        format!("• 기피 요소: {}", join_or(&prefs.avoid, NONE)),
        format!("• 최근 좋아한 책(선택): {}", join_or(&prefs.liked_books, MISSING)),
        format!("• 분량 느낌: {}", prefs.length.label()),
    ];

    lines.join("\n").trim().to_string()
}

/// Short description of the ranking mode in the prompt's language
pub fn mode_text(mode: RankingMode) -> String {
    match mode {
        RankingMode::Famous => "유명도 높은 작품 우선".to_string(),
        RankingMode::Balanced => "유명도와 발굴의 균형".to_string(),
        RankingMode::Discover { .. } => {
            let strength = mode.explore_strength().unwrap_or_default();
            // truncated, so 0.29 reads as 28%
            format!("발굴 우선(실험성 {}%)", (strength * 100.0) as u32)
        }
    }
}

fn join_or(items: &[String], placeholder: &str) -> String {
    if items.is_empty() {
        placeholder.to_string()
    } else {
        items.join(", ")
    }
}
