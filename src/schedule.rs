use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// Which stations draw on each weekday, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationSchedule {
    days: [Vec<String>; 7],
}

impl StationSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Southern-region (`mn`) rota.
    pub fn southern() -> Self {
        let mut schedule = Self::new();
        schedule.set(Weekday::Mon, ["TP. Hồ Chí Minh", "Đồng Tháp", "Cà Mau"]);
        schedule.set(Weekday::Tue, ["Bến Tre", "Vũng Tàu", "Bạc Liêu"]);
        schedule.set(Weekday::Wed, ["Đồng Nai", "Cần Thơ", "Sóc Trăng"]);
        schedule.set(Weekday::Thu, ["Tây Ninh", "An Giang", "Bình Thuận"]);
        schedule.set(Weekday::Fri, ["Vĩnh Long", "Bình Dương", "Trà Vinh"]);
        schedule.set(
            Weekday::Sat,
            ["TP. Hồ Chí Minh", "Long An", "Bình Phước", "Hậu Giang"],
        );
        schedule.set(Weekday::Sun, ["Tiền Giang", "Kiên Giang", "Đà Lạt"]);
        schedule
    }

    pub fn set<I, S>(&mut self, weekday: Weekday, stations: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.days[weekday.num_days_from_monday() as usize] =
            stations.into_iter().map(Into::into).collect();
    }

    pub fn with_day<I, S>(mut self, weekday: Weekday, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.set(weekday, stations);
        self
    }

    /// Stations for `weekday`; `None` when none are configured.
    pub fn stations_for(&self, weekday: Weekday) -> Option<&[String]> {
        let stations = &self.days[weekday.num_days_from_monday() as usize];
        (!stations.is_empty()).then_some(stations.as_slice())
    }
}
