use std::sync::Arc;

use super::CatalogProvider;
use crate::{
    error::AppResult,
    models::{BookRecord, Tone},
};

/// The hard-coded demo list shipped with the service
///
/// Small and illustrative only. The last three entries are deliberately
/// lesser-known titles so discover mode has something to surface.
#[derive(Clone)]
pub struct DemoCatalog {
    books: Arc<Vec<BookRecord>>,
}

impl Default for DemoCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoCatalog {
    pub fn new() -> Self {
        Self {
            books: Arc::new(demo_books()),
        }
    }
}

#[async_trait::async_trait]
impl CatalogProvider for DemoCatalog {
    async fn catalog(&self) -> AppResult<Vec<BookRecord>> {
        Ok(self.books.as_ref().clone())
    }

    fn name(&self) -> &'static str {
        "demo"
    }
}

/// Reference catalog: title, author, year, tone, genres, popularity
pub fn demo_books() -> Vec<BookRecord> {
    vec![
        BookRecord::new("노인과 바다", "어니스트 헤밍웨이", 1952, Tone::Calm, &["소설", "고전"], 0.98),
        BookRecord::new("그리고 아무도 없었다", "아가사 크리스티", 1939, Tone::Thrilling, &["미스터리", "소설"], 0.97),
        BookRecord::new("데미안", "헤르만 헤세", 1919, Tone::Serious, &["소설", "성장"], 0.96),
        BookRecord::new("나는 고양이로소이다", "나쓰메 소세키", 1905, Tone::Humorous, &["소설", "고전"], 0.9),
        BookRecord::new("해리 포터와 마법사의 돌", "J.K. 롤링", 1997, Tone::Adventurous, &["판타지", "소설"], 0.99),
        BookRecord::new("사피엔스", "유발 하라리", 2011, Tone::Serious, &["논픽션", "역사"], 0.98),
        BookRecord::new("유혹하는 에세이", "알랭 드 보통", 2000, Tone::Calm, &["에세이"], 0.85),
        BookRecord::new("The Midnight Library", "Matt Haig", 2020, Tone::Calm, &["소설"], 0.9),
        BookRecord::new("Project Hail Mary", "Andy Weir", 2021, Tone::Thrilling, &["SF", "소설"], 0.92),
        BookRecord::new("나의 산책은 길에서 시작된다", "임의 작가A", 2018, Tone::Calm, &["에세이"], 0.3),
        BookRecord::new("도시의 낮은 별들", "임의 작가B", 2022, Tone::Serious, &["소설"], 0.25),
        BookRecord::new("바람이 그린 지도", "임의 작가C", 2023, Tone::Adventurous, &["소설", "여행"], 0.2),
    ]
}
