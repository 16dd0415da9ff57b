//! User-facing strings.
//!
//! Every message is looked up by key in a per-locale table. Korean entries that
//! are missing fall back to English, and unknown keys fall back to the key itself,
//! so a lookup never fails. Placeholders are written `{name}`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ko,
}

impl Locale {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ko => "ko",
        }
    }

    /// Case-insensitive; region tags (`ko-KR`, `en_US`) are ignored
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.split(['-', '_']).next().unwrap_or("") {
            "en" => Some(Self::En),
            "ko" => Some(Self::Ko),
            _ => None,
        }
    }

    fn catalog(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::En => CATALOG_EN,
            Self::Ko => CATALOG_KO,
        }
    }
}

const CATALOG_EN: &[(&str, &str)] = &[
    ("catalog.fallback", "Error loading datasets."),
    (
        "changelog.fallback",
        "Changelog not yet available. Data will be collected starting next week.",
    ),
    (
        "trends.fallback",
        "Trend data not yet available. Data will be collected starting next week.",
    ),
    ("stats.fallback", "Statistics not yet available."),
    ("dataset.unknown_author", "Unknown"),
    ("dataset.no_description", "No description available."),
    ("dataset.by", "by {author}"),
    ("catalog.last_updated", "Last updated: {date}"),
    ("catalog.matches", "{count} datasets"),
    ("catalog.empty", "No datasets match the current filters."),
    ("catalog.page", "Page {page} / {total}"),
    ("catalog.exported", "Exported {count} rows to {path}"),
    ("filters.authors", "Authors"),
    ("filters.tasks", "Tasks"),
    ("filters.any", "All"),
    ("filters.summary", "{authors} authors, {tasks} tasks"),
    ("stats.title", "Statistics"),
    ("stats.total_datasets", "Total datasets"),
    ("stats.total_downloads", "Total downloads"),
    ("stats.total_likes", "Total likes"),
    ("stats.multilingual", "Multilingual datasets"),
    ("stats.top_authors", "Top authors"),
    ("stats.top_tasks", "Top tasks"),
    (
        "changelog.period",
        "Comparing: {previous} → {current} ({previous_count} → {current_count} datasets)",
    ),
    ("changelog.new", "New datasets"),
    ("changelog.updated", "Updated datasets"),
    ("changelog.removed", "Removed datasets"),
    ("changelog.unchanged", "Unchanged"),
    ("changelog.net", "Net change"),
    ("changelog.author", "Author: {author}"),
    ("changelog.loaded", "{new} new, {removed} removed, {updated} updated"),
    ("badge.downloads", "{count} downloads"),
    ("badge.likes", "{count} likes"),
    ("badge.had_downloads", "Had {count} downloads"),
    ("badge.had_likes", "Had {count} likes"),
    ("badge.downloads_change", "Downloads: {delta} ({previous} → {current})"),
    ("badge.likes_change", "Likes: {delta} ({previous} → {current})"),
    ("badge.description_updated", "Description updated"),
    ("trends.growth", "Growth rate"),
    ("trends.weeks", "Weeks tracked"),
    ("trends.range", "Period"),
    ("trends.no_samples", "No samples yet."),
    ("trends.loaded", "{weeks} weeks of history"),
    ("chart.datasets", "Total Datasets"),
    ("chart.downloads", "Total Downloads"),
    ("chart.likes", "Total Likes"),
    ("chart.multilingual", "Multilingual Dataset Ratio (%)"),
    ("tab.catalog", "Catalog"),
    ("tab.changelog", "Changelog"),
    ("tab.trends", "Trends"),
    ("tui.loading", "Loading..."),
    ("tui.search", "Search"),
    ("tui.sort", "Sort"),
    ("tui.sort_default", "default"),
    (
        "tui.help",
        "/ search  a author  t task  s sort  ←/→ page  ↑/↓ scroll  Tab switch  q quit",
    ),
    ("tui.editing", "Enter apply  Esc cancel"),
];

const CATALOG_KO: &[(&str, &str)] = &[
    ("catalog.fallback", "데이터셋을 불러오는 중 오류가 발생했습니다."),
    (
        "changelog.fallback",
        "변경 이력이 아직 없습니다. 다음 주부터 데이터가 수집됩니다.",
    ),
    (
        "trends.fallback",
        "트렌드 데이터가 아직 없습니다. 다음 주부터 데이터가 수집됩니다.",
    ),
    ("stats.fallback", "통계가 아직 없습니다."),
    ("dataset.unknown_author", "알 수 없음"),
    ("dataset.no_description", "설명이 없습니다."),
    ("dataset.by", "작성자: {author}"),
    ("catalog.last_updated", "마지막 업데이트: {date}"),
    ("catalog.matches", "데이터셋 {count}개"),
    ("catalog.empty", "조건에 맞는 데이터셋이 없습니다."),
    ("catalog.page", "페이지 {page} / {total}"),
    ("catalog.exported", "{count}개 행을 {path}에 저장했습니다"),
    ("filters.authors", "작성자"),
    ("filters.tasks", "태스크"),
    ("filters.any", "전체"),
    ("filters.summary", "작성자 {authors}명, 태스크 {tasks}개"),
    ("stats.title", "통계"),
    ("stats.total_datasets", "전체 데이터셋"),
    ("stats.total_downloads", "전체 다운로드"),
    ("stats.total_likes", "전체 좋아요"),
    ("stats.multilingual", "다국어 데이터셋"),
    ("stats.top_authors", "상위 작성자"),
    ("stats.top_tasks", "상위 태스크"),
    (
        "changelog.period",
        "비교 기간: {previous} → {current} (데이터셋 {previous_count} → {current_count}개)",
    ),
    ("changelog.new", "새 데이터셋"),
    ("changelog.updated", "업데이트된 데이터셋"),
    ("changelog.removed", "삭제된 데이터셋"),
    ("changelog.unchanged", "변경 없음"),
    ("changelog.net", "순증감"),
    ("changelog.author", "작성자: {author}"),
    ("changelog.loaded", "신규 {new}, 삭제 {removed}, 업데이트 {updated}"),
    ("badge.downloads", "다운로드 {count}회"),
    ("badge.likes", "좋아요 {count}개"),
    ("badge.had_downloads", "다운로드 {count}회였음"),
    ("badge.had_likes", "좋아요 {count}개였음"),
    ("badge.downloads_change", "다운로드: {delta} ({previous} → {current})"),
    ("badge.likes_change", "좋아요: {delta} ({previous} → {current})"),
    ("badge.description_updated", "설명 변경됨"),
    ("trends.growth", "성장률"),
    ("trends.weeks", "수집 주차"),
    ("trends.range", "기간"),
    ("trends.no_samples", "아직 수집된 데이터가 없습니다."),
    ("trends.loaded", "{weeks}주간의 기록"),
    ("chart.datasets", "전체 데이터셋"),
    ("chart.downloads", "전체 다운로드"),
    ("chart.likes", "전체 좋아요"),
    ("chart.multilingual", "다국어 데이터셋 비율 (%)"),
    ("tab.catalog", "카탈로그"),
    ("tab.changelog", "변경 이력"),
    ("tab.trends", "트렌드"),
    ("tui.loading", "불러오는 중..."),
    ("tui.search", "검색"),
    ("tui.sort", "정렬"),
    ("tui.sort_default", "기본"),
];

/// Message lookup bound to one locale. Cheap to copy and pass around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Template for `key`, falling back to English and then to the key itself
    pub fn get<'k>(&self, key: &'k str) -> &'k str {
        match lookup(self.locale.catalog(), key).or_else(|| lookup(CATALOG_EN, key)) {
            Some(text) => text,
            None => key,
        }
    }

    /// Template for `key` with every `{name}` placeholder replaced
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key).to_string();
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }
}

fn lookup(catalog: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    catalog
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, text)| *text)
}
