use predictor_core::model::card::Card;

/// Rendering collaborator. Notifications are fire-and-forget: the game
/// proceeds whether or not anything is drawn.
pub trait CardRenderer {
    fn clear(&mut self);
    fn hole_cards(&mut self, slot: usize, face_up: bool, cards: [Card; 2]);
    fn table_card(&mut self, card: Card);
}

/// Draws the table as compact card codes on stdout.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl CardRenderer for TextRenderer {
    fn clear(&mut self) {
        println!("--- new hand ---");
    }

    fn hole_cards(&mut self, slot: usize, face_up: bool, cards: [Card; 2]) {
        if face_up {
            println!("[seat {slot}] {} {}", cards[0], cards[1]);
        } else {
            println!("[seat {slot}] ## ##");
        }
    }

    fn table_card(&mut self, card: Card) {
        println!("[table] {card}");
    }
}

/// Swallows every notification; backs tests.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct NullRenderer;

impl CardRenderer for NullRenderer {
    fn clear(&mut self) {}
    fn hole_cards(&mut self, _slot: usize, _face_up: bool, _cards: [Card; 2]) {}
    fn table_card(&mut self, _card: Card) {}
}
