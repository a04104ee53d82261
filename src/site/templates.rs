// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! minijinja sources for the landing pages

pub const LAYOUT: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ meta.title }}</title>
    <meta name="description" content="{{ meta.description }}">
    <meta name="keywords" content="{{ meta.keywords|join(", ") }}">
    <link rel="icon" href="{{ meta.favicon }}">
    <meta property="og:title" content="{{ meta.title }}">
    <meta property="og:description" content="{{ meta.social_description }}">
    <meta property="og:type" content="website">
    <meta property="og:site_name" content="{{ meta.site_name }}">
    <meta property="og:image" content="{{ meta.og_image }}">
    <meta property="og:image:width" content="{{ meta.og_image_width }}">
    <meta property="og:image:height" content="{{ meta.og_image_height }}">
    <meta property="og:image:alt" content="{{ meta.title }}">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:title" content="{{ meta.title }}">
    <meta name="twitter:description" content="{{ meta.social_description }}">
    <meta name="twitter:image" content="{{ meta.og_image }}">
    <style>
        :root {
            --navy: {{ variant.theme.navy }};
            --teal: {{ variant.theme.teal }};
            --teal-light: {{ variant.theme.teal_light }};
            --teal-soft: {{ variant.theme.teal_soft }};
            --teal-pale: {{ variant.theme.teal_pale }};
            --coral: {{ variant.theme.coral }};
            --bg-light: {{ variant.theme.page_background }};
            --gray: #6b7280;
            --border: #e5e7eb;
            --font-display: {{ variant.theme.display_font|safe }};
            --font-body: {{ variant.theme.body_font|safe }};
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body { font-family: var(--font-body); color: var(--navy); line-height: 1.6; -webkit-font-smoothing: antialiased; }
        h1, h2, h3 { font-family: var(--font-display); line-height: 1.15; }
        .wrap { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
        .eyebrow { font-size: 0.75rem; font-weight: 600; letter-spacing: 0.08em; text-transform: uppercase; color: var(--teal); margin-bottom: 1rem; }
        .muted { color: var(--gray); }
        section { padding: 5rem 1rem; }
        .center { text-align: center; }
        nav#site-nav { position: fixed; top: 0; left: 0; right: 0; z-index: 50; padding: 1rem 1.5rem; transition: all 0.3s; }
        nav#site-nav.scrolled { background: rgba(255,255,255,0.9); backdrop-filter: blur(12px); box-shadow: 0 1px 2px rgba(0,0,0,0.05); }
        .logo { font-weight: 700; letter-spacing: -0.02em; font-size: 1.875rem; }
        .logo .dot { color: var(--coral); }
        .hero { position: relative; min-height: 85vh; display: flex; align-items: center; justify-content: center; overflow: hidden; color: white; }
        .hero video { position: absolute; inset: 0; width: 100%; height: 100%; object-fit: cover; }
        .hero .shade { position: absolute; inset: 0; background: linear-gradient(to bottom, rgba(0,0,0,0.7), rgba(0,0,0,0.6), rgba(0,0,0,0.8)); }
        .hero .fade { position: absolute; bottom: 0; left: 0; right: 0; height: 8rem; background: linear-gradient(to top, white, transparent); }
        .hero .content { position: relative; max-width: 56rem; padding: 4rem 1.5rem 0; text-align: center; }
        .hero .eyebrow { color: var(--teal-light); }
        .hero h1 { font-size: clamp(3rem, 7vw, 4.5rem); margin-bottom: 2rem; }
        .hero p.subtitle { font-size: 1.25rem; opacity: 0.9; max-width: 42rem; margin: 0 auto; }
        .quote { background: #f9fafb; border: 1px solid #f3f4f6; border-radius: 0.5rem; padding: 1.5rem; font-size: 1.25rem; font-weight: 500; }
        .bento { display: grid; grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr)); gap: 1rem; }
        .card { background: white; border: 1px solid var(--border); border-radius: 0.5rem; padding: 1.5rem; display: flex; flex-direction: column; }
        .card h3 { font-size: 1.5rem; font-weight: 600; }
        .card .visual { flex: 1; display: flex; align-items: center; justify-content: center; min-height: 180px; position: relative; }
        .doc-sheet { position: relative; width: 10rem; height: 13rem; background: white; border: 1px solid var(--border); border-radius: 0.5rem; padding: 1rem; animation: document-float 4s ease-in-out infinite; }
        .doc-sheet.back { position: absolute; background: #f3f4f6; transform: rotate(2deg); animation: document-stack-2 4s ease-in-out infinite; }
        .doc-line { height: 0.375rem; background: #f3f4f6; border-radius: 2px; margin-bottom: 0.25rem; }
        .doc-line.hit { background: var(--teal-soft); }
        .aliases { display: flex; align-items: center; gap: 0.75rem; }
        .alias { background: var(--teal-pale); border: 1px solid var(--border); border-radius: 0.5rem; padding: 0.75rem 1rem; text-align: center; }
        .alias .spelling { font-size: 1.125rem; font-weight: 600; }
        .alias .language { font-size: 0.625rem; color: #9ca3af; }
        .link-mark { color: #d1d5db; animation: language-link 2.4s ease-in-out infinite; }
        #entity-discovery { background: var(--teal-pale); min-height: 320px; overflow: hidden; }
        #entity-discovery .stack { position: relative; width: 100%; max-width: 380px; height: 140px; margin: 0 auto; }
        .notification { position: absolute; top: 50%; left: 0; right: 0; display: flex; align-items: center; gap: 1rem; padding: 1rem; background: white; border-radius: 0.5rem; box-shadow: 0 4px 6px rgba(0,0,0,0.1); pointer-events: none; user-select: none; }
        .notification .icon { width: 3rem; height: 3rem; border-radius: 0.5rem; background: var(--teal-soft); color: var(--teal); display: flex; align-items: center; justify-content: center; flex-shrink: 0; }
        .notification .kind { font-weight: 600; }
        .notification .entity { font-size: 0.875rem; color: var(--gray); white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
        .compare { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
        .compare .before { background: #f9fafb; border-radius: 0.5rem; padding: 1rem; color: #4b5563; font-size: 0.875rem; }
        .compare .after { background: var(--teal-pale); border-radius: 0.5rem; padding: 1rem; font-size: 0.875rem; font-weight: 500; }
        .steps { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 2rem; }
        .step .number { font-family: monospace; font-size: 0.75rem; color: var(--teal); font-weight: 600; }
        .shots { display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem; }
        .shots img { width: 100%; aspect-ratio: 4 / 3; object-fit: cover; border-radius: 0.5rem; border: 1px solid var(--border); }
        footer { background: var(--navy); color: white; padding: 4rem 1.5rem; text-align: center; }
        footer .partners { display: flex; justify-content: center; gap: 3rem; background: rgba(255,255,255,0.05); border-radius: 0.5rem; padding: 2rem; margin: 3rem 0 2rem; }
        footer .partners img { height: 4rem; width: auto; }
        footer .demo { display: inline-block; margin-top: 1rem; color: var(--teal-light); }
        @keyframes line-fade-in { from { opacity: 0; } to { opacity: 0.6; } }
        @keyframes node-pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.08); } }
        @keyframes center-node-pulse { 0%, 100% { opacity: 1; } 50% { opacity: 0.85; } }
        @keyframes document-float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-6px); } }
        @keyframes document-stack-2 { 0%, 100% { transform: rotate(2deg); } 50% { transform: rotate(3deg); } }
        @keyframes language-link { 0%, 100% { color: #d1d5db; } 50% { color: var(--teal); } }
        svg.network-graph { width: 100%; max-width: 300px; }
        svg.network-graph circle { transform-box: fill-box; transform-origin: center; }
    </style>
</head>
<body class="variant-{{ variant.name }}">
    {% block content %}{% endblock %}
    <script id="acf-config" type="application/json">{{ client_config|safe }}</script>
    <script>{{ client_script|safe }}</script>
</body>
</html>"##;

pub const PAGE: &str = r##"{% extends "layout.html" %}
{% block content %}
<nav id="site-nav"><div class="wrap"></div></nav>
<main>
    <section class="hero">
        <video src="{{ hero_video }}" autoplay muted loop playsinline></video>
        <div class="shade"></div>
        <div class="fade"></div>
        <div class="content">
            <p class="eyebrow">{{ variant.tagline }}</p>
            <h1>{% for line in variant.headline %}{{ line }}{% if not loop.last %}<br>{% endif %}{% endfor %}</h1>
            <p class="subtitle">{{ hero_subtitle }}</p>
        </div>
    </section>

    <section class="problem">
        <div class="wrap center" style="max-width: 48rem;">
            <p class="eyebrow">The Problem</p>
            <h2>{{ problem.heading }}</h2>
            {% for paragraph in problem.paragraphs %}<p class="muted" style="margin-top: 1.5rem;">{{ paragraph }}</p>{% endfor %}
            <div class="quote" style="margin-top: 2.5rem;">&ldquo;{{ problem.quote[0] }}<br>{{ problem.quote[1] }}&rdquo;</div>
        </div>
    </section>

    <section id="features" style="background: var(--bg-light);">
        <div class="wrap">
            <div class="center" style="margin-bottom: 3rem;">
                <p class="eyebrow">The Solution</p>
                <h2>One system for all your research</h2>
                <p class="muted">Every document, every entity, and every connection: searchable, linkable, and persistent.</p>
            </div>
            <div class="bento">
                <div class="card">
                    <p class="eyebrow">{{ upload.eyebrow }}</p>
                    <h3>{{ upload.title }}</h3>
                    <p class="muted">{{ upload.body }}</p>
                    <div class="visual">
                        <div class="doc-sheet back"></div>
                        <div class="doc-sheet">
                            <div class="doc-line" style="width: 75%; background: var(--navy); opacity: 0.2;"></div>
                            <div class="doc-line"></div>
                            <div class="doc-line"></div>
                            <div class="doc-line hit" style="width: 50%;"></div>
                            <div class="doc-line"></div>
                            <div class="doc-line hit" style="width: 75%;"></div>
                        </div>
                    </div>
                </div>
                <div class="card">
                    <p class="eyebrow">{{ mapping.eyebrow }}</p>
                    <h3>{{ mapping.title }}</h3>
                    <p class="muted">{{ mapping.body }}</p>
                    <div class="visual">{% include "graph.html" %}</div>
                </div>
                <div class="card">
                    <p class="eyebrow">{{ language.eyebrow }}</p>
                    <h3>{{ language.title }}</h3>
                    <p class="muted">{{ language.body }}</p>
                    <div class="visual aliases">
                        {% for alias in aliases %}
                        <div class="alias"><p class="spelling">{{ alias.spelling }}</p><p class="language">{{ alias.language }}</p></div>
                        {% if not loop.last %}<span class="link-mark" style="animation-delay: {{ alias.link_delay }}s">=</span>{% endif %}
                        {% endfor %}
                    </div>
                </div>
                <div class="card" id="entity-discovery" data-variant="{{ variant.name }}">
                    <h3 class="center">{{ discovery.title }}</h3>
                    <p class="muted center">{{ discovery.body }}</p>
                    <div class="visual"><div class="stack" aria-live="polite"></div></div>
                    <div style="margin-top: 1rem;">
                        <h3 style="font-size: 1.25rem;">{{ persistence.title }}</h3>
                        <p class="muted">{{ persistence.body }}</p>
                    </div>
                </div>
            </div>
        </div>
    </section>

    <section class="before-after">
        <div class="wrap" style="max-width: 64rem;">
            <div class="center" style="margin-bottom: 3rem;">
                <p class="eyebrow">What Changes</p>
                <h2>Before vs. After</h2>
            </div>
            <div class="compare">
                <div class="muted">Before</div><div class="muted">After</div>
                {% for row in comparisons %}
                <div class="before">{{ row.before }}</div><div class="after">{{ row.after }}</div>
                {% endfor %}
            </div>
        </div>
    </section>

    <section class="how-it-works" style="background: var(--bg-light);">
        <div class="wrap">
            <div class="center" style="margin-bottom: 3rem;">
                <p class="eyebrow">How It Works</p>
                <h2>From document to intelligence</h2>
            </div>
            <div class="steps">
                {% for step in steps %}
                <div class="step"><span class="number">{{ step.number }}</span><h3>{{ step.title }}</h3><p class="muted">{{ step.description }}</p></div>
                {% endfor %}
            </div>
        </div>
    </section>

    <section class="screenshots">
        <div class="wrap">
            <div class="center" style="margin-bottom: 3rem;">
                <p class="eyebrow">See It In Action</p>
                <h2>The platform in action</h2>
                <p class="muted">Real screenshots from the application showing document analysis, entity extraction, and connection mapping.</p>
            </div>
            <div class="shots">
                {% for shot in screenshots %}
                <figure><img src="{{ shot.src }}" alt="{{ shot.alt }}" loading="lazy"><h3 style="font-size: 1.125rem;">{{ shot.title }}</h3><figcaption class="muted">{{ shot.caption }}</figcaption></figure>
                {% endfor %}
            </div>
        </div>
    </section>
</main>

<footer>
    <div class="wrap" style="max-width: 56rem;">
        <span class="logo">acf<span class="dot">.</span></span>
        <p style="opacity: 0.5; margin-top: 1rem;">{{ footer_blurb }}</p>
        <div class="partners">
            {% for partner in partners %}<img src="{{ partner.logo }}" alt="{{ partner.name }}" width="200" height="80">{% endfor %}
        </div>
        <a class="demo" href="{{ demo_url }}">Try the live demo</a>
        <p style="opacity: 0.3; font-size: 0.875rem; margin-top: 2rem;">{{ footer_motto }} &copy; {{ year }}</p>
    </div>
</footer>

<template id="notification-card">
    <div class="notification">
        <div class="icon"><svg width="24" height="24" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/></svg></div>
        <div style="flex: 1; min-width: 0;"><p class="kind"></p><p class="entity"></p></div>
    </div>
</template>
{% endblock %}"##;

/// Browser side of the entity-discovery panel and the nav scroll toggle
pub const CLIENT_SCRIPT: &str = r#"(function () {
    var cfg = JSON.parse(document.getElementById('acf-config').textContent);

    var nav = document.getElementById('site-nav');
    var onScroll = function () { nav.classList.toggle('scrolled', window.scrollY > cfg.navScrollThreshold); };
    window.addEventListener('scroll', onScroll, { passive: true });
    onScroll();

    var panel = document.getElementById('entity-discovery');
    if (!panel || !('WebSocket' in window)) return;
    var stack = panel.querySelector('.stack');
    var template = document.getElementById('notification-card');
    var cards = new Map();

    var scheme = location.protocol === 'https:' ? 'wss:' : 'ws:';
    var socket = new WebSocket(scheme + '//' + location.host + cfg.socketPath + '?variant=' + encodeURIComponent(cfg.variant));

    socket.addEventListener('open', function () {
        var observer = new IntersectionObserver(function (entries) {
            var entry = entries[0];
            socket.send(JSON.stringify({ type: 'intersection', ratio: entry.isIntersecting ? entry.intersectionRatio : 0 }));
        }, { threshold: [0, cfg.visibilityThreshold] });
        observer.observe(panel);
        socket.addEventListener('close', function () { observer.disconnect(); });
    });

    socket.addEventListener('message', function (event) {
        var msg = JSON.parse(event.data);
        if (msg.type !== 'frame') return;
        var seen = new Set();
        msg.notifications.forEach(function (n) {
            seen.add(n.id);
            var card = cards.get(n.id);
            if (!card) {
                card = template.content.firstElementChild.cloneNode(true);
                card.querySelector('.kind').textContent = n.type;
                card.querySelector('.entity').textContent = n.entity;
                card.style.transition = cfg.transition;
                cards.set(n.id, card);
                stack.appendChild(card);
            }
            card.style.transform = n.transform;
            card.style.opacity = n.opacity;
            card.style.zIndex = n.stackIndex;
        });
        cards.forEach(function (card, id) {
            if (!seen.has(id)) { card.remove(); cards.delete(id); }
        });
    });
})();"#;

/// Ownership network for the "Connection Mapping" card
pub const GRAPH: &str = r##"{% set c = graph.center -%}
<svg class="network-graph" viewBox="0 0 {{ graph.width }} {{ graph.height }}" role="img" aria-label="Ownership network">
    {%- for edge in graph.edges %}{% set target = graph.satellites[edge.to] %}
    <line x1="{{ c.x }}" y1="{{ c.y }}" x2="{{ target.x }}" y2="{{ target.y }}" stroke="var(--teal)" stroke-width="1.5" opacity="0" style="animation: line-fade-in 1s ease-out forwards; animation-delay: {{ edge.fade_delay|round(1) }}s"/>
    {%- endfor %}
    <circle cx="{{ c.x }}" cy="{{ c.y }}" r="{{ c.radius }}" fill="var(--navy)" style="animation: center-node-pulse 2.5s ease-in-out infinite"/>
    <text x="{{ c.x }}" y="{{ c.y + 4 }}" text-anchor="middle" fill="white" font-size="8" font-weight="500">{{ c.label }}</text>
    {%- for node in graph.satellites %}
    <circle cx="{{ node.x }}" cy="{{ node.y }}" r="{{ node.radius }}" fill="var(--teal-soft)" stroke="var(--teal)" stroke-width="1" style="animation: node-pulse 2s ease-in-out infinite; animation-delay: {{ node.pulse_delay|round(1) }}s"/>
    <text x="{{ node.x }}" y="{{ node.y + 4 }}" text-anchor="middle" fill="var(--navy)" font-size="7" font-weight="500">{{ node.label }}</text>
    {%- endfor %}
</svg>"##;

pub const ERROR_PAGE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ status }} - ACF</title>
</head>
<body>
    <h1>{{ reason }}</h1>
    <p>{{ message }}</p>
    <p><a href="/">Back to the home page</a></p>
</body>
</html>"##;
