use crate::domain::{
    Book,
    recommendation::{RECOMMENDATION_SIZE, select_recommendations},
};
use rand::Rng;

use super::catalog_service::ServiceDependencies;

/// おすすめの書籍を取得する（スレッドローカルの乱数を使用）
pub fn recommend_books(deps: &ServiceDependencies) -> Vec<Book> {
    recommend_books_with(deps, &mut rand::thread_rng())
}

/// おすすめの書籍を取得する
///
/// カタログのスナップショットに対して選択するため、選択中にロックは保持しない。
pub fn recommend_books_with<R>(deps: &ServiceDependencies, rng: &mut R) -> Vec<Book>
where
    R: Rng + ?Sized,
{
    let all_books = deps.catalog.all();

    if !all_books.is_empty() && all_books.len() < RECOMMENDATION_SIZE {
        tracing::warn!(
            "Not enough books available for recommendations. Found: {}",
            all_books.len()
        );
    }

    let recommendations = select_recommendations(&all_books, rng);
    tracing::info!(
        "Successfully generated recommendation with {} books",
        recommendations.len()
    );
    recommendations
}
