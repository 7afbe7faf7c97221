//! DOM mirror of the engine's entity pools. Lifecycle events create and
//! remove nodes keyed by entity id; after each tick the live pools are
//! read back off the engine and restyled in place. Nothing in here
//! decides behavior, it only reflects it.

use fnv::FnvHashMap;
use fx_core::{EffectEngine, EffectEvent, EntityId, ParticleKind};
use web_sys as web;

use crate::constants::*;
use crate::dom;

pub struct EffectSurface {
    document: web::Document,
    layer: web::HtmlElement,
    follower: web::HtmlElement,
    nodes: FnvHashMap<EntityId, web::HtmlElement>,
}

impl EffectSurface {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no body"))?;
        let layer = dom::create_div(document, LAYER_CLASS)
            .ok_or_else(|| anyhow::anyhow!("cannot create effect layer"))?;
        base_node_style(&layer);
        dom::set_style(&layer, "inset", "0");
        let _ = body.append_child(&layer);

        let follower = dom::create_div(document, FOLLOWER_CLASS)
            .ok_or_else(|| anyhow::anyhow!("cannot create cursor follower"))?;
        base_node_style(&follower);
        let _ = layer.append_child(&follower);

        Ok(Self {
            document: document.clone(),
            layer,
            follower,
            nodes: FnvHashMap::default(),
        })
    }

    /// Applies one tick's worth of lifecycle events to the node registry.
    pub fn apply_events(&mut self, events: &[EffectEvent]) {
        for event in events {
            match *event {
                EffectEvent::TrailSpawned { id, .. } => {
                    self.spawn_node(id, TRAIL_CLASS);
                }
                EffectEvent::ParticleSpawned { id, kind, .. } => {
                    let el = self.spawn_node(id, PARTICLE_CLASS);
                    if let Some(el) = el {
                        if kind == ParticleKind::Burst {
                            dom::add_class(&el, BURST_CLASS);
                        }
                    }
                }
                EffectEvent::OverlayOpened { id, size, .. } => {
                    if let Some(el) = self.spawn_node(id, HOLE_CLASS) {
                        dom::set_style(&el, "width", &px(size));
                        dom::set_style(&el, "height", &px(size));
                    }
                }
                EffectEvent::OverlayClosing { id } => {
                    if let Some(el) = self.nodes.get(&id) {
                        dom::add_class(el, CLOSING_CLASS);
                    }
                }
                EffectEvent::StreakSpawned { id, .. } => {
                    if let Some(el) = self.spawn_node(id, RAIN_CLASS) {
                        dom::set_style(&el, "white-space", "pre");
                    }
                }
                EffectEvent::OrbSpawned { id, size, .. } => {
                    if let Some(el) = self.spawn_node(id, ORB_CLASS) {
                        dom::set_style(&el, "width", &px(size));
                        dom::set_style(&el, "height", &px(size));
                    }
                }
                EffectEvent::TrailEvicted { id }
                | EffectEvent::ParticleExpired { id }
                | EffectEvent::OverlayExpired { id }
                | EffectEvent::StreakExpired { id }
                | EffectEvent::OrbRetired { id } => {
                    self.remove_node(id);
                }
            }
        }
    }

    /// Restyles every live node from the engine's current state.
    pub fn sync(&self, engine: &EffectEngine) {
        let now = engine.ticks();

        let follower = engine.follower();
        dom::set_class(&self.follower, ACTIVE_CLASS, follower.active());
        translate(&self.follower, follower.position().x, follower.position().y);

        let mut opacity = 1.0_f32;
        for point in engine.trail().iter() {
            if let Some(el) = self.nodes.get(&point.id) {
                translate(el, point.position.x, point.position.y);
                dom::set_style(el, "opacity", &fmt_f32(opacity));
            }
            opacity *= TRAIL_OPACITY_FALLOFF;
        }

        for particle in engine.particles().iter() {
            if let Some(el) = self.nodes.get(&particle.id) {
                translate(el, particle.position.x, particle.position.y);
                dom::set_style(el, "opacity", &fmt_f32(particle.opacity()));
            }
        }

        for overlay in engine.overlays().iter() {
            if let Some(el) = self.nodes.get(&overlay.id) {
                let half = overlay.size * 0.5;
                let scale = overlay.scale(now);
                let _ = el.style().set_property(
                    "transform",
                    &format!(
                        "translate3d({}px, {}px, 0) scale({})",
                        fmt_f32(overlay.position.x - half),
                        fmt_f32(overlay.position.y - half),
                        fmt_f32(scale)
                    ),
                );
            }
        }

        for orb in engine.orbs().iter() {
            if let Some(el) = self.nodes.get(&orb.id) {
                let half = orb.size * 0.5;
                translate(el, orb.position.x - half, orb.position.y - half);
            }
        }

        let rain = engine.rain();
        for streak in rain.iter() {
            if let Some(el) = self.nodes.get(&streak.id) {
                let x = streak.column as f32 * rain.column_width();
                translate(el, x, rain.top_y(streak));
                el.set_text_content(Some(&streak.text()));
            }
        }
    }

    /// Live generated nodes, excluding the layer and follower.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Drops every generated node and the layer itself.
    pub fn teardown(&mut self) {
        for (_, el) in self.nodes.drain() {
            el.remove();
        }
        self.layer.remove();
    }

    fn spawn_node(&mut self, id: EntityId, class: &str) -> Option<web::HtmlElement> {
        let el = dom::create_div(&self.document, class)?;
        base_node_style(&el);
        let _ = self.layer.append_child(&el);
        self.nodes.insert(id, el.clone());
        Some(el)
    }

    fn remove_node(&mut self, id: EntityId) {
        if let Some(el) = self.nodes.remove(&id) {
            el.remove();
        } else {
            log::warn!("[surface] removal for unknown entity {id}");
        }
    }
}

fn base_node_style(el: &web::HtmlElement) {
    dom::set_style(el, "position", "fixed");
    dom::set_style(el, "left", "0");
    dom::set_style(el, "top", "0");
    dom::set_style(el, "pointer-events", "none");
    dom::set_style(el, "will-change", "transform");
}

#[inline]
fn translate(el: &web::HtmlElement, x: f32, y: f32) {
    let _ = el.style().set_property(
        "transform",
        &format!("translate3d({}px, {}px, 0)", fmt_f32(x), fmt_f32(y)),
    );
}

#[inline]
fn px(v: f32) -> String {
    format!("{}px", fmt_f32(v))
}

#[inline]
fn fmt_f32(v: f32) -> String {
    format!("{v:.2}")
}
