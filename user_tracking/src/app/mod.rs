use std::cell::RefCell;
use std::rc::Rc;

use crate::config::Config;
use crate::control::{self, TrackingControl, TrackingIcons};
use crate::gui::styles::button_style::demo_button;
use crate::gui::styles::container_style::{content_container, map_frame, ContainerLayer};
use crate::gui::styles::TRACKING_THEME;
use crate::gui::widgets::map_canvas::map_canvas;
use crate::gui::widgets::tracking_status::tracking_status_widget;
use crate::map::{MapObserver, MapSnapshot, MapView, SimulatedMap};
use crate::model::TrackingResult;
use iced::futures::SinkExt;
use iced::widget::canvas::Cache;
use iced::widget::{column, container, row, stack, text, Space};
use iced::window;
use iced::Alignment;
use iced::{stream, time, Element, Length, Settings, Subscription, Task};
use tokio::sync::watch;

fn map_change_worker(
    mut changes: watch::Receiver<MapSnapshot>,
) -> impl iced::futures::Stream<Item = Message> {
    stream::channel(16, |mut output| async move {
        while changes.changed().await.is_ok() {
            let snapshot = *changes.borrow_and_update();
            if output.send(Message::MapChanged(snapshot)).await.is_err() {
                break; // UI dropped
            }
        }
    })
}

#[derive(Debug, Clone)]
pub enum Message {
    Control(control::Message),
    MapChanged(MapSnapshot),
    StepFix,
    LoseFix,
}

pub struct MainWindow {
    map: Rc<RefCell<SimulatedMap>>,
    changes: watch::Receiver<MapSnapshot>,
    snapshot: MapSnapshot,
    grid_cache: Cache,
    control: TrackingControl,
    config: Config,
}

fn load_config() -> Config {
    if let Err(e) = Config::initialize() {
        tracing::warn!("using default config: {e}");
    }
    Config::get()
}

fn load_icons(config: &Config) -> TrackingResult<Option<TrackingIcons>> {
    match &config.icons {
        Some(paths) => TrackingIcons::from_paths(paths).map(Some),
        None => Ok(None),
    }
}

impl MainWindow {
    pub fn new() -> (Self, Task<Message>) {
        let config = load_config();
        let map = Rc::new(RefCell::new(SimulatedMap::new(config.simulation.clone())));
        let changes = map.borrow().subscribe();

        let mut control = TrackingControl::with_map(&config, &map);
        match load_icons(&config) {
            Ok(Some(icons)) => control.set_icons(icons),
            Ok(None) => {}
            Err(e) => tracing::warn!("using built-in icons: {e}"),
        }
        control.refresh(false);

        let snapshot = map.borrow().snapshot();
        let app = Self {
            map,
            changes,
            snapshot,
            grid_cache: Cache::new(),
            control,
            config,
        };
        (app, Task::none())
    }

    fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![
            self.control.subscription().map(Message::Control),
            Subscription::run_with_id("map-changes", map_change_worker(self.changes.clone())),
        ];
        if self.snapshot.mode.is_tracking() {
            subscriptions.push(
                time::every(self.config.simulation.step_interval()).map(|_| Message::StepFix),
            );
        }
        Subscription::batch(subscriptions)
    }

    pub fn run(settings: Settings) -> iced::Result {
        let win = window::Settings {
            size: iced::Size::new(480.0, 520.0),
            ..Default::default()
        };

        iced::application("User Tracking", Self::update, Self::view)
            .subscription(|app: &MainWindow| app.subscription())
            .theme(|_| TRACKING_THEME.clone())
            .settings(settings)
            .window(win)
            .run_with(Self::new)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Control(msg) => self.control.update(msg),
            Message::MapChanged(snapshot) => {
                self.snapshot = snapshot;
                self.control.map_state_changed(true);
            }
            Message::StepFix => self.map.borrow_mut().step_fix(),
            Message::LoseFix => self.map.borrow_mut().lose_fix(),
        }
        Task::none()
    }

    fn view(&self) -> Element<Message> {
        let control_size = self.control.intrinsic_size();
        let overlay = container(self.control.view().map(Message::Control))
            .width(Length::Fill)
            .align_x(Alignment::End)
            .padding(12);

        let map_area = map_frame(stack![
            map_canvas(self.snapshot, self.control.tint(), &self.grid_cache),
            overlay,
        ])
        .width(Length::Fill)
        .height(Length::Fill);

        let tracking = self.map.borrow().user_tracking_mode();
        let status = content_container(
            row![
                text("Status:"),
                tracking_status_widget(self.control.mode()),
                Space::with_width(Length::Fill),
                text(format!("{tracking:?}")),
            ]
            .align_y(Alignment::Center)
            .spacing(10),
            ContainerLayer::Layer2,
        )
        .width(Length::Fill);

        let lose_fix = demo_button(
            text("Lose fix"),
            Some(Message::LoseFix),
            self.snapshot.location.is_some(),
        )
        .width(Length::Fixed(control_size.width * 4.0));

        content_container(
            column![map_area, row![status, lose_fix].spacing(10).align_y(Alignment::Center)]
                .spacing(10),
            ContainerLayer::Layer1,
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}
