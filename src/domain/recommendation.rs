use rand::Rng;
use rand::seq::SliceRandom;

use super::book::Book;

/// おすすめリストの件数
pub const RECOMMENDATION_SIZE: usize = 10;

/// 人気順で選ばれる件数（残りは無作為抽出）
pub const POPULAR_COUNT: usize = 5;

/// 純粋関数：おすすめの書籍を選ぶ
///
/// ルール：
/// - 10冊以上ある場合：貸出回数の多い上位5冊 + 残りから無作為に5冊（重複なし）
/// - 10冊未満の場合：全冊を貸出回数の降順で返す（無作為部分なし）
/// - 0冊の場合：空のリスト
///
/// 並べ替えは安定ソートのため、同じ貸出回数の書籍は元の順序を保つ。
/// 乱数源は引数で受け取る（テストではシード固定のRNGを渡す）。
pub fn select_recommendations<R>(books: &[Book], rng: &mut R) -> Vec<Book>
where
    R: Rng + ?Sized,
{
    let mut sorted = books.to_vec();
    sorted.sort_by(|a, b| {
        b.amount_of_times_checked_out()
            .cmp(&a.amount_of_times_checked_out())
    });

    if sorted.len() < RECOMMENDATION_SIZE {
        return sorted;
    }

    let mut remaining = sorted.split_off(POPULAR_COUNT);
    let random_count = RECOMMENDATION_SIZE - POPULAR_COUNT;

    // 部分的なFisher-Yatesシャッフルで非復元抽出する
    let (drawn, _) = remaining.partial_shuffle(rng, random_count);
    sorted.extend(drawn.iter().cloned());

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    /// 貸出回数を指定して書籍を作る
    fn book_with_checkouts(id: u32, checkouts: u32) -> Book {
        let mut book = Book::new(format!("Book {id}"), BookId::new(id));
        for _ in 0..checkouts {
            book.add_copy();
            book.checkout_copy();
        }
        book
    }

    fn ids(books: &[Book]) -> Vec<u32> {
        books.iter().map(|b| b.id().value()).collect()
    }

    #[test]
    fn test_select_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_recommendations(&[], &mut rng).is_empty());
    }

    #[test]
    fn test_select_fewer_than_ten_returns_all_sorted() {
        let books = vec![
            book_with_checkouts(1, 2),
            book_with_checkouts(2, 7),
            book_with_checkouts(3, 0),
            book_with_checkouts(4, 7),
            book_with_checkouts(5, 4),
        ];
        let mut rng = StdRng::seed_from_u64(1);

        let result = select_recommendations(&books, &mut rng);

        // 同数の2と4は元の順序を保つ
        assert_eq!(ids(&result), vec![2, 4, 5, 1, 3]);
    }

    #[test]
    fn test_select_fifteen_books() {
        let books: Vec<Book> = (1..=15).map(|id| book_with_checkouts(id, id % 8)).collect();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = select_recommendations(&books, &mut rng);

            assert_eq!(result.len(), RECOMMENDATION_SIZE);
            let unique: HashSet<u32> = ids(&result).into_iter().collect();
            assert_eq!(unique.len(), RECOMMENDATION_SIZE);

            // 上位5冊は貸出回数7,7,6,6,5（同数はID順）
            assert_eq!(ids(&result[..POPULAR_COUNT]), vec![7, 15, 6, 14, 5]);
            for book in &result[POPULAR_COUNT..] {
                assert!(![7, 15, 6, 14, 5].contains(&book.id().value()));
            }
        }
    }

    #[test]
    fn test_select_exactly_ten_uses_every_book() {
        let books: Vec<Book> = (1..=10).map(|id| book_with_checkouts(id, id)).collect();
        let mut rng = StdRng::seed_from_u64(42);

        let result = select_recommendations(&books, &mut rng);

        assert_eq!(ids(&result[..POPULAR_COUNT]), vec![10, 9, 8, 7, 6]);
        let mut rest = ids(&result[POPULAR_COUNT..]);
        rest.sort();
        assert_eq!(rest, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_select_random_part_varies_with_seed() {
        let books: Vec<Book> = (1..=40).map(|id| book_with_checkouts(id, 0)).collect();

        let picks: HashSet<Vec<u32>> = (0..10)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                ids(&select_recommendations(&books, &mut rng)[POPULAR_COUNT..])
            })
            .collect();

        assert!(picks.len() > 1);
    }

    #[test]
    fn test_select_does_not_mutate_input() {
        let books: Vec<Book> = (1..=12).map(|id| book_with_checkouts(id, 12 - id)).collect();
        let before = ids(&books);
        let mut rng = StdRng::seed_from_u64(3);

        select_recommendations(&books, &mut rng);

        assert_eq!(ids(&books), before);
    }
}
