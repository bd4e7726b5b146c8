//! Session booking for the latched specialist. Confirming shows a summary,
//! then hands back to the specialist list after a short pause.

use std::time::Duration;

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::info;

use crate::catalog::{SESSION_TYPES, TIME_SLOTS};
use crate::config::Config;
use crate::events::{BookingSummary, GroveEvent};
use crate::screen::{Direction, ScreenId};
use crate::timers::{TimerFired, TimerKind, TimerSender, Timers};

use super::{NavRequest, ScreenAction, ScreenCx};

pub const BOOKABLE_DAYS: usize = 5;

/// `count` dates starting at `today`, skipping Sundays.
pub fn bookable_dates(today: NaiveDate, count: usize) -> Vec<NaiveDate> {
    today
        .iter_days()
        .filter(|d| d.weekday() != Weekday::Sun)
        .take(count)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingField {
    Date,
    Time,
    SessionType,
    Notes,
}

impl BookingField {
    const ORDER: [BookingField; 4] = [
        BookingField::Date,
        BookingField::Time,
        BookingField::SessionType,
        BookingField::Notes,
    ];

    fn step(self, forward: bool) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        let len = Self::ORDER.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        Self::ORDER[next]
    }
}

#[derive(Debug)]
pub struct BookingScreen {
    timers: Timers,
    dates: Vec<NaiveDate>,
    date: usize,
    time: Option<usize>,
    session_type: Option<usize>,
    notes: String,
    focus: BookingField,
    booked: Option<BookingSummary>,
    confirm_delay: Duration,
}

impl BookingScreen {
    pub fn new(tx: TimerSender, config: &Config, today: NaiveDate) -> Self {
        Self {
            timers: Timers::new(tx),
            dates: bookable_dates(today, BOOKABLE_DAYS),
            date: 0,
            time: None,
            session_type: None,
            notes: String::new(),
            focus: BookingField::Date,
            booked: None,
            confirm_delay: config.booking_confirm_delay(),
        }
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn date_index(&self) -> usize {
        self.date
    }

    pub fn time(&self) -> Option<usize> {
        self.time
    }

    pub fn session_type(&self) -> Option<usize> {
        self.session_type
    }

    pub fn notes(&self) -> &str {
        &self.notes
    }

    pub fn focus(&self) -> BookingField {
        self.focus
    }

    pub fn booked(&self) -> Option<&BookingSummary> {
        self.booked.as_ref()
    }

    pub fn can_confirm(&self) -> bool {
        self.booked.is_none() && self.time.is_some() && self.session_type.is_some()
    }

    pub fn select_date(&mut self, idx: usize) {
        if idx < self.dates.len() {
            self.date = idx;
        }
    }

    /// Unavailable slots cannot be picked.
    pub fn select_time(&mut self, idx: usize) -> bool {
        match TIME_SLOTS.get(idx) {
            Some(slot) if slot.available => {
                self.time = Some(idx);
                true
            }
            _ => false,
        }
    }

    pub fn select_session_type(&mut self, idx: usize) {
        if idx < SESSION_TYPES.len() {
            self.session_type = Some(idx);
        }
    }

    pub fn handle(&mut self, action: ScreenAction, cx: &mut ScreenCx<'_>) -> Option<NavRequest> {
        if self.booked.is_some() {
            // Only "back to specialists" is live on the summary.
            return match action {
                ScreenAction::Activate | ScreenAction::Back | ScreenAction::Tap => {
                    Some(NavRequest::to(ScreenId::Specialists))
                }
                _ => None,
            };
        }

        match action {
            ScreenAction::Back => return Some(NavRequest::to(ScreenId::Specialists)),
            ScreenAction::SelectDate(idx) => self.select_date(idx),
            ScreenAction::SelectTime(idx) => {
                self.select_time(idx);
            }
            ScreenAction::SelectSessionType(idx) => self.select_session_type(idx),
            ScreenAction::NextField | ScreenAction::Move(Direction::Down) => {
                self.focus = self.focus.step(true)
            }
            ScreenAction::Move(Direction::Up) => self.focus = self.focus.step(false),
            ScreenAction::Move(Direction::Left) => self.step_field(false),
            ScreenAction::Move(Direction::Right) => self.step_field(true),
            ScreenAction::Char(c) if self.focus == BookingField::Notes => self.notes.push(c),
            ScreenAction::Backspace if self.focus == BookingField::Notes => {
                self.notes.pop();
            }
            ScreenAction::Activate => {
                self.confirm(cx);
            }
            _ => {}
        }
        None
    }

    /// Book the session. Requires a time slot and a session type.
    pub fn confirm(&mut self, cx: &mut ScreenCx<'_>) -> bool {
        if !self.can_confirm() {
            return false;
        }
        let (Some(time), Some(kind)) = (self.time, self.session_type) else {
            return false;
        };
        let summary = BookingSummary {
            specialist: cx.context.specialist,
            date: self.dates[self.date],
            time: TIME_SLOTS[time].time,
            session_type: SESSION_TYPES[kind].name,
            notes: self.notes.trim().to_string(),
        };
        info!(
            "Booked {} on {} at {}",
            summary.session_type, summary.date, summary.time
        );
        cx.events.push(GroveEvent::BookingConfirmed(summary.clone()));
        self.booked = Some(summary);
        self.timers.once(TimerKind::BookingConfirmed, self.confirm_delay);
        true
    }

    pub fn on_timer(&mut self, fired: &TimerFired) -> Option<NavRequest> {
        if !self.timers.accept(fired) {
            return None;
        }
        match fired.kind {
            TimerKind::BookingConfirmed => Some(NavRequest::to(ScreenId::Specialists)),
            _ => None,
        }
    }

    pub fn teardown(&mut self) {
        self.timers.cancel_all();
    }

    fn step_field(&mut self, forward: bool) {
        match self.focus {
            BookingField::Date => {
                let next = if forward {
                    (self.date + 1).min(self.dates.len().saturating_sub(1))
                } else {
                    self.date.saturating_sub(1)
                };
                self.date = next;
            }
            BookingField::Time => {
                let available: Vec<usize> = TIME_SLOTS
                    .iter()
                    .enumerate()
                    .filter(|(_, s)| s.available)
                    .map(|(i, _)| i)
                    .collect();
                self.time = step_choice(self.time, &available, forward);
            }
            BookingField::SessionType => {
                let all: Vec<usize> = (0..SESSION_TYPES.len()).collect();
                self.session_type = step_choice(self.session_type, &all, forward);
            }
            BookingField::Notes => {}
        }
    }
}

/// Move to the neighbouring entry of `choices`, clamping at both ends.
fn step_choice(current: Option<usize>, choices: &[usize], forward: bool) -> Option<usize> {
    let first = *choices.first()?;
    let Some(cur) = current else {
        return Some(first);
    };
    let pos = choices.iter().position(|&c| c == cur).unwrap_or(0);
    let next = if forward {
        (pos + 1).min(choices.len() - 1)
    } else {
        pos.saturating_sub(1)
    };
    Some(choices[next])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::NavigationContext;
    use crate::screen::SpecialistId;
    use crate::timers;
    use tokio::time::Instant;

    fn friday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    fn act(
        screen: &mut BookingScreen,
        action: ScreenAction,
        events: &mut Vec<GroveEvent>,
    ) -> Option<NavRequest> {
        let mut cx = ScreenCx {
            now: Instant::now(),
            context: NavigationContext::specialist(SpecialistId(3)),
            events,
        };
        screen.handle(action, &mut cx)
    }

    #[test]
    fn test_bookable_dates_skip_sunday() {
        let dates = bookable_dates(friday(), BOOKABLE_DAYS);
        let days: Vec<u32> = dates.iter().map(|d| d.day()).collect();
        assert_eq!(days, vec![15, 16, 18, 19, 20]);
    }

    #[test]
    fn test_step_choice_clamps() {
        assert_eq!(step_choice(None, &[0, 1, 3], true), Some(0));
        assert_eq!(step_choice(Some(1), &[0, 1, 3], true), Some(3));
        assert_eq!(step_choice(Some(3), &[0, 1, 3], true), Some(3));
        assert_eq!(step_choice(Some(0), &[0, 1, 3], false), Some(0));
        assert_eq!(step_choice(None, &[], true), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_requires_time_and_type() {
        let (tx, mut rx) = timers::channel();
        let mut screen = BookingScreen::new(tx, &Config::default(), friday());
        let mut events = Vec::new();

        act(&mut screen, ScreenAction::Activate, &mut events);
        assert!(screen.booked().is_none());

        // Slot 2 (2:00 PM) is unavailable.
        act(&mut screen, ScreenAction::SelectTime(2), &mut events);
        assert_eq!(screen.time(), None);
        act(&mut screen, ScreenAction::SelectTime(3), &mut events);
        act(&mut screen, ScreenAction::Activate, &mut events);
        assert!(screen.booked().is_none());

        act(&mut screen, ScreenAction::SelectSessionType(0), &mut events);
        act(&mut screen, ScreenAction::SelectDate(1), &mut events);
        act(&mut screen, ScreenAction::Activate, &mut events);

        let summary = screen.booked().unwrap().clone();
        assert_eq!(summary.specialist, Some(SpecialistId(3)));
        assert_eq!(summary.time, "3:30 PM");
        assert_eq!(summary.session_type, "Video Session");
        assert_eq!(summary.date, NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert_eq!(events, vec![GroveEvent::BookingConfirmed(summary)]);

        let start = Instant::now();
        let fired = rx.recv().await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert_eq!(
            screen.on_timer(&fired),
            Some(NavRequest::to(ScreenId::Specialists))
        );
    }

    #[tokio::test]
    async fn test_keyboard_flow_with_notes() {
        let (tx, _rx) = timers::channel();
        let mut screen = BookingScreen::new(tx, &Config::default(), friday());
        let mut events = Vec::new();

        act(&mut screen, ScreenAction::NextField, &mut events);
        assert_eq!(screen.focus(), BookingField::Time);
        act(&mut screen, ScreenAction::Move(Direction::Right), &mut events);
        act(&mut screen, ScreenAction::Move(Direction::Right), &mut events);
        assert_eq!(screen.time(), Some(1));
        act(&mut screen, ScreenAction::Move(Direction::Right), &mut events);
        assert_eq!(screen.time(), Some(3)); // skips the unavailable slot

        act(&mut screen, ScreenAction::Move(Direction::Down), &mut events);
        act(&mut screen, ScreenAction::Move(Direction::Left), &mut events);
        assert_eq!(screen.session_type(), Some(0));

        act(&mut screen, ScreenAction::NextField, &mut events);
        for c in "exams ".chars() {
            act(&mut screen, ScreenAction::Char(c), &mut events);
        }
        act(&mut screen, ScreenAction::Backspace, &mut events);
        assert_eq!(screen.notes(), "exams");

        act(&mut screen, ScreenAction::Activate, &mut events);
        assert_eq!(screen.booked().unwrap().notes, "exams");

        // The summary only offers the way back.
        assert_eq!(
            act(&mut screen, ScreenAction::Char('x'), &mut events),
            None
        );
        assert_eq!(
            act(&mut screen, ScreenAction::Activate, &mut events),
            Some(NavRequest::to(ScreenId::Specialists))
        );
    }

    #[tokio::test]
    async fn test_back_returns_to_specialists() {
        let (tx, _rx) = timers::channel();
        let mut screen = BookingScreen::new(tx, &Config::default(), friday());
        let mut events = Vec::new();
        assert_eq!(
            act(&mut screen, ScreenAction::Back, &mut events),
            Some(NavRequest::to(ScreenId::Specialists))
        );
    }
}
