use chefbot::{classify, Direction};

const FRENCH_RESPONSE: &str = "\
Gratin de courgettes au chèvre
- 3 courgettes
- 200g de chèvre
- 20cl de crème
1. Préchauffer le four à 180°C
2. Couper les courgettes en rondelles
3. Alterner courgettes et fromage dans un plat
4. Enfourner trente minutes";

#[test]
fn test_realistic_french_response() {
    let recipe = classify(FRENCH_RESPONSE, Direction::LeftToRight);

    assert_eq!(recipe.title, "Gratin de courgettes au chèvre");
    assert_eq!(recipe.ingredients_block.len(), 3);
    assert_eq!(recipe.steps_block.len(), 4);
    assert!(recipe.steps_block[0].starts_with("1."));
    assert_eq!(recipe.full_text, FRENCH_RESPONSE);
}

#[test]
fn test_partition_covers_every_kept_line() {
    let recipe = classify(FRENCH_RESPONSE, Direction::LeftToRight);

    let mut reconstructed: Vec<&str> = Vec::new();
    reconstructed.push(&recipe.title);
    reconstructed.extend(recipe.ingredients_block.iter().map(|s| s.as_str()));
    reconstructed.extend(recipe.steps_block.iter().map(|s| s.as_str()));
    reconstructed.sort_unstable();

    let mut expected: Vec<&str> = FRENCH_RESPONSE.split('\n').collect();
    expected.sort_unstable();

    assert_eq!(reconstructed, expected);
}

#[test]
fn test_step_five_is_not_a_step() {
    // Only "1." through "4." are recognized step markers; this is a
    // long-standing quirk the classifier keeps for compatibility.
    let text = "Title\n5. Whisk eggs";
    let recipe = classify(text, Direction::LeftToRight);
    assert!(recipe.steps_block.is_empty());
    assert_eq!(recipe.ingredients_block, vec!["5. Whisk eggs"]);
}

#[test]
fn test_classify_never_panics_on_odd_input() {
    for input in ["", "\n", "\n\n\n", "1.", "only one line", "  \n  "] {
        let _ = classify(input, Direction::LeftToRight);
        let _ = classify(input, Direction::RightToLeft);
    }
}

#[test]
fn test_arabic_response_with_leaked_english_headers() {
    let text = "\
شوربة عدس
Ingredients:
كوب عدس أحمر
بصلة مفرومة
Preparation steps:
1. اقلي البصل
2. أضيفي العدس والماء";

    let recipe = classify(text, Direction::RightToLeft);
    assert_eq!(recipe.title, "شوربة عدس");
    assert_eq!(recipe.ingredients_block, vec!["كوب عدس أحمر", "بصلة مفرومة"]);
    assert_eq!(recipe.steps_block.len(), 2);
    // Leaked headers are dropped entirely, not relocated
    assert!(!recipe.full_text.to_lowercase().contains("ingredients"));
    assert!(!recipe.full_text.to_lowercase().contains("preparation"));
}

#[test]
fn test_french_response_with_leaked_arabic_headers() {
    let text = "Salade niçoise\nمقادير:\n2 tomates\n1. Laver les légumes";
    let recipe = classify(text, Direction::LeftToRight);
    assert_eq!(recipe.ingredients_block, vec!["2 tomates"]);
    assert!(!recipe.full_text.contains("مقادير"));
}
