use crate::model::hand::Hand;
use crate::model::pot::Pot;

/// One seat at the table. The active-opponent count is not stored here:
/// it is a single shared counter owned by the game session.
#[derive(Debug, Clone)]
pub struct Participant {
    hand: Hand,
    money: i64,
    start_money: i64,
    folded: bool,
}

impl Participant {
    pub fn new(start_money: i64) -> Self {
        Self {
            hand: Hand::new(),
            money: start_money,
            start_money,
            folded: false,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn start_money(&self) -> i64 {
        self.start_money
    }

    pub fn is_folded(&self) -> bool {
        self.folded
    }

    pub fn set_folded(&mut self, folded: bool) {
        self.folded = folded;
    }

    /// Debits the balance (which may go negative) and feeds the pot.
    pub fn place_bet(&mut self, amount: u64, pot: &mut Pot) {
        self.money -= amount as i64;
        pot.add_bet(amount);
    }

    pub fn award(&mut self, winnings: u64) {
        self.money += winnings as i64;
    }

    pub fn reset_for_next_hand(&mut self) {
        self.hand.clear();
        self.folded = false;
    }
}
