//! The ten slide procedures.
//!
//! Each procedure fills one blank slide with literal content at fixed
//! coordinates (inches). Procedures are independent of one another; they
//! share only the palette and the layout helpers.

use deck_core::{Align, Color, Font, Frame, Paragraph, Presentation, Run, Slide};

use crate::compose::{
    add_bullets, add_panel, add_rect, add_text, set_background, BulletStyle, TextStyle,
};
use crate::palette::{
    ACCENT_BLUE, ACCENT_GREEN, ACCENT_PURPLE, ACCENT_RED, ACCENT_YELLOW, BG_CARD, BG_DARK,
    BG_SLIDE, DARK_GRAY, GRAY, WHITE,
};

/// Canvas width in inches (16:9 widescreen).
const SLIDE_W: f64 = 13.333;

/// Shorthand for a frame given in inches.
fn fr(left: f64, top: f64, width: f64, height: f64) -> Frame {
    Frame::from_inches(left, top, width, height)
}

/// Full-width accent bar along the top edge.
fn add_top_bar(slide: &mut Slide) {
    add_rect(slide, fr(0.0, 0.0, SLIDE_W, 0.06), ACCENT_GREEN);
}

/// Shared header for the content slides: dark background, top bar, section
/// title, and a short accent underline.
fn add_section_header(slide: &mut Slide, title: &str) {
    set_background(slide, BG_SLIDE);
    add_top_bar(slide);
    add_text(
        slide,
        fr(0.8, 0.4, 11.0, 0.7),
        title,
        TextStyle::new(36.0, WHITE).bold(),
    );
    add_rect(slide, fr(0.8, 1.05, 2.0, 0.04), ACCENT_GREEN);
}

/// Slide 1: title.
fn title_slide(slide: &mut Slide) {
    set_background(slide, BG_DARK);
    add_top_bar(slide);

    // Tiny scene vignette: player, two enemies, one bullet.
    add_rect(slide, fr(5.9, 1.8, 0.6, 0.6), ACCENT_GREEN);
    add_rect(slide, fr(7.0, 1.9, 0.4, 0.4), ACCENT_RED);
    add_rect(slide, fr(4.8, 2.0, 0.35, 0.35), ACCENT_RED);
    add_rect(slide, fr(6.6, 2.05, 0.15, 0.15), ACCENT_YELLOW);

    add_text(
        slide,
        fr(1.0, 2.8, 11.3, 1.2),
        "VIBE SURVIVAL GAME",
        TextStyle::new(54.0, WHITE).bold().centered(),
    );
    add_text(
        slide,
        fr(2.0, 3.9, 9.3, 0.7),
        "2D Top-Down Roguelike Survival Game",
        TextStyle::new(24.0, ACCENT_GREEN).centered(),
    );
    add_text(
        slide,
        fr(2.5, 4.7, 8.3, 0.8),
        "Phaser 3 + React + Electron  |  TypeScript  |  Desktop Application",
        TextStyle::new(16.0, GRAY).centered(),
    );

    add_rect(slide, fr(0.0, 7.44, SLIDE_W, 0.06), ACCENT_GREEN);
}

/// Slide 2: project overview.
fn overview_slide(slide: &mut Slide) {
    add_section_header(slide, "PROJECT OVERVIEW");

    add_panel(slide, fr(0.8, 1.5, 5.6, 5.3), BG_CARD);
    add_text(
        slide,
        fr(1.2, 1.7, 4.8, 0.5),
        "What is Vibe Survival?",
        TextStyle::new(22.0, ACCENT_GREEN).bold(),
    );
    add_bullets(
        slide,
        fr(1.2, 2.3, 4.8, 4.0),
        &[
            "2D Top-Down Roguelike Survival Game",
            "Minimalist auto-attack combat system",
            "Endless wave survival with increasing difficulty",
            "Character growth through leveling system",
            "Desktop application built with Electron",
            "Procedurally generated graphics (no external assets)",
            "High score persistence across sessions",
        ],
        BulletStyle::new(15.0, ACCENT_GREEN),
    );

    add_panel(slide, fr(6.8, 1.5, 5.6, 5.3), BG_CARD);
    add_text(
        slide,
        fr(7.2, 1.7, 4.8, 0.5),
        "Key Numbers",
        TextStyle::new(22.0, ACCENT_YELLOW).bold(),
    );

    let stats = [
        ("519", "Lines of Code"),
        ("7", "Source Files"),
        ("5", "Dependencies"),
        ("800x600", "Game Resolution"),
        ("32x32", "Sprite Size (px)"),
    ];
    let mut y = 2.4;
    for (value, label) in stats {
        add_text(
            slide,
            fr(7.4, y, 2.0, 0.45),
            value,
            TextStyle::new(28.0, ACCENT_BLUE).bold(),
        );
        add_text(
            slide,
            fr(9.4, y + 0.05, 2.5, 0.4),
            label,
            TextStyle::new(16.0, GRAY),
        );
        y += 0.85;
    }
}

/// Slide 3: technology stack, four accent-striped cards.
fn tech_stack_slide(slide: &mut Slide) {
    add_section_header(slide, "TECH STACK");

    let cards: [(&str, Color, [&str; 4]); 4] = [
        (
            "Game Engine",
            ACCENT_GREEN,
            [
                "Phaser 3 (v3.80.0)",
                "2D game framework",
                "Arcade physics engine",
                "Canvas renderer",
            ],
        ),
        (
            "Frontend",
            ACCENT_BLUE,
            [
                "React 18 (v18.2.0)",
                "TypeScript (v5.3.3)",
                "JSX component architecture",
                "Phaser-React integration",
            ],
        ),
        (
            "Desktop",
            ACCENT_PURPLE,
            [
                "Electron (v28.1.0)",
                "Cross-platform desktop app",
                "electron-store for data",
                "Preload script security",
            ],
        ),
        (
            "Build Tools",
            ACCENT_YELLOW,
            [
                "Vite (v5.0.12)",
                "vite-plugin-electron",
                "electron-builder",
                "@vitejs/plugin-react",
            ],
        ),
    ];

    let mut x = 0.6;
    for (title, color, items) in cards {
        add_panel(slide, fr(x, 1.5, 2.9, 5.2), BG_CARD);
        add_rect(slide, fr(x, 1.5, 2.9, 0.06), color);
        add_text(
            slide,
            fr(x + 0.3, 1.8, 2.4, 0.5),
            title,
            TextStyle::new(20.0, color).bold(),
        );
        add_bullets(
            slide,
            fr(x + 0.3, 2.5, 2.4, 3.5),
            &items,
            BulletStyle::new(14.0, color),
        );
        x += 3.1;
    }
}

/// One full-width layer card of the architecture diagram: accent edge
/// strip, bold title, and a gray detail line.
fn add_layer_card(slide: &mut Slide, top: f64, color: Color, title: &str, detail: &str) {
    add_panel(slide, fr(0.8, top, 11.7, 1.2), BG_CARD);
    add_rect(slide, fr(0.8, top, 0.06, 1.2), color);
    add_text(
        slide,
        fr(1.2, top + 0.1, 3.0, 0.4),
        title,
        TextStyle::new(18.0, color).bold(),
    );
    add_text(
        slide,
        fr(1.2, top + 0.5, 10.0, 0.5),
        detail,
        TextStyle::new(14.0, GRAY),
    );
}

/// Slide 4: architecture layers and the two Phaser scenes.
fn architecture_slide(slide: &mut Slide) {
    add_section_header(slide, "ARCHITECTURE");

    add_layer_card(
        slide,
        1.5,
        ACCENT_PURPLE,
        "Electron (Main Process)",
        "main.ts  ->  BrowserWindow (800x600)  ->  preload.ts (electron-store IPC)",
    );
    add_text(
        slide,
        fr(6.0, 2.75, 1.3, 0.5),
        "▼",
        TextStyle::new(24.0, ACCENT_GREEN).centered(),
    );

    add_layer_card(
        slide,
        3.1,
        ACCENT_BLUE,
        "React (Renderer Process)",
        "main.tsx  ->  App.tsx (Phaser Game initialization)  ->  <div id=\"phaser-container\">",
    );
    add_text(
        slide,
        fr(6.0, 4.35, 1.3, 0.5),
        "▼",
        TextStyle::new(24.0, ACCENT_GREEN).centered(),
    );

    add_panel(slide, fr(0.8, 4.7, 5.5, 2.2), BG_CARD);
    add_rect(slide, fr(0.8, 4.7, 0.06, 2.2), ACCENT_GREEN);
    add_text(
        slide,
        fr(1.2, 4.8, 4.5, 0.4),
        "StartScene.ts",
        TextStyle::new(18.0, ACCENT_GREEN).bold(),
    );
    add_bullets(
        slide,
        fr(1.2, 5.3, 4.5, 1.5),
        &[
            "Title screen & menu",
            "High score display",
            "Start button with hover effect",
        ],
        BulletStyle::new(13.0, ACCENT_GREEN),
    );

    add_panel(slide, fr(7.0, 4.7, 5.5, 2.2), BG_CARD);
    add_rect(slide, fr(7.0, 4.7, 0.06, 2.2), ACCENT_YELLOW);
    add_text(
        slide,
        fr(7.4, 4.8, 4.5, 0.4),
        "GameScene.ts (288 lines)",
        TextStyle::new(18.0, ACCENT_YELLOW).bold(),
    );
    add_bullets(
        slide,
        fr(7.4, 5.3, 4.5, 1.5),
        &[
            "Main gameplay loop",
            "Physics & collision",
            "Auto-attack & leveling",
            "Enemy spawning system",
        ],
        BulletStyle::new(13.0, ACCENT_YELLOW),
    );

    add_text(
        slide,
        fr(6.1, 5.5, 1.2, 0.5),
        "◀ ▶",
        TextStyle::new(20.0, ACCENT_GREEN).centered(),
    );
}

/// One mechanics card: panel, small colored icon square, bold title, and
/// a bulleted stat list.
fn add_mechanics_card(
    slide: &mut Slide,
    left: f64,
    color: Color,
    icon_size: f64,
    title: &str,
    items: &[&str],
) {
    add_panel(slide, fr(left, 1.4, 3.8, 5.5), BG_CARD);
    add_rect(slide, fr(left + 0.8, 1.7, icon_size, icon_size), color);
    // Title starts just past the icon square.
    add_text(
        slide,
        fr(left + 0.8 + icon_size + 0.2, 1.7, 2.0, 0.5),
        title,
        TextStyle::new(20.0, color).bold(),
    );
    add_bullets(
        slide,
        fr(left + 0.4, 2.4, 3.0, 4.0),
        items,
        BulletStyle::new(13.0, color),
    );
}

/// Slide 5: core game mechanics, three stat cards.
fn mechanics_slide(slide: &mut Slide) {
    add_section_header(slide, "CORE GAME MECHANICS");

    add_mechanics_card(
        slide,
        0.6,
        ACCENT_GREEN,
        0.5,
        "PLAYER",
        &[
            "HP: 100",
            "Speed: 200 px/s",
            "Movement: WASD / Arrow",
            "Auto-attack (range: 300px)",
            "Fire rate: 2 shots/sec",
            "Level-up: full heal",
            "Scale +10% per level",
        ],
    );
    add_mechanics_card(
        slide,
        4.8,
        ACCENT_YELLOW,
        0.5,
        "COMBAT",
        &[
            "Auto-targeting system",
            "Nearest enemy priority",
            "Bullet speed: 400 px/s",
            "Bullet lifetime: 1 sec",
            "Damage: 5 per bullet",
            "Knockback on collision",
            "Red tint damage feedback",
        ],
    );
    add_mechanics_card(
        slide,
        9.0,
        ACCENT_RED,
        0.4,
        "ENEMY",
        &[
            "HP: 10 (2 hits to kill)",
            "Speed: 100 px/s",
            "Spawn: every 1 second",
            "Chase AI (moveToObject)",
            "Contact damage: 10 HP",
            "XP reward: 20 per kill",
            "Random edge spawn",
        ],
    );
}

/// Slide 6: game state, progression rules, and the flow strip.
fn state_progression_slide(slide: &mut Slide) {
    add_section_header(slide, "GAME STATE & PROGRESSION");

    add_panel(slide, fr(0.8, 1.5, 5.8, 3.0), BG_CARD);
    add_text(
        slide,
        fr(1.2, 1.7, 5.0, 0.4),
        "Game State Variables",
        TextStyle::new(20.0, ACCENT_BLUE).bold(),
    );
    let state_code = [
        "hp: number = 100          // Current health",
        "maxHp: number = 100       // Maximum health",
        "xp: number = 0            // Experience points",
        "level: number = 1         // Current level",
        "score: number = 0         // Total score",
        "nextLevelXp: number = 100 // XP to next level",
        "isGameOver: boolean       // Game state flag",
    ]
    .join("\n");
    add_text(
        slide,
        fr(1.2, 2.2, 5.2, 2.2),
        &state_code,
        TextStyle::new(12.0, ACCENT_GREEN).family("Consolas"),
    );

    add_panel(slide, fr(7.0, 1.5, 5.8, 3.0), BG_CARD);
    add_text(
        slide,
        fr(7.4, 1.7, 5.0, 0.4),
        "Progression System",
        TextStyle::new(20.0, ACCENT_PURPLE).bold(),
    );
    add_bullets(
        slide,
        fr(7.4, 2.3, 5.0, 2.2),
        &[
            "Kill enemies -> Earn 20 XP each",
            "XP threshold increases +20% per level",
            "Level up -> Full heal to max HP",
            "Player sprite grows 10% per level",
            "Score = XP earned x 10",
            "High score saved to electron-store",
        ],
        BulletStyle::new(14.0, ACCENT_PURPLE),
    );

    add_panel(slide, fr(0.8, 4.8, 11.7, 2.2), BG_CARD);
    add_text(
        slide,
        fr(1.2, 5.0, 5.0, 0.4),
        "Game Flow",
        TextStyle::new(20.0, ACCENT_YELLOW).bold(),
    );

    let stages = [
        ("START\nSCENE", ACCENT_BLUE),
        ("GAMEPLAY\n(Survive)", ACCENT_GREEN),
        ("ENEMIES\nSPAWN", ACCENT_RED),
        ("LEVEL UP\n(Heal)", ACCENT_PURPLE),
        ("GAME OVER\n(Score)", ACCENT_YELLOW),
        ("HIGH SCORE\n(Save)", ACCENT_BLUE),
    ];
    let mut x = 1.0;
    for (index, (label, color)) in stages.into_iter().enumerate() {
        if index > 0 {
            add_text(
                slide,
                fr(x, 5.6, 0.5, 0.5),
                "->",
                TextStyle::new(16.0, GRAY).centered(),
            );
            x += 0.5;
        }
        add_flow_box(slide, x, label, color);
        x += 1.7;
    }
}

/// One stage box of the flow strip: a small colored panel with centered
/// dark label text.
fn add_flow_box(slide: &mut Slide, left: f64, label: &str, color: Color) {
    let shape = add_panel(slide, fr(left, 5.5, 1.5, 1.0), color);
    let text_frame = shape.text_frame();
    for line in label.split('\n') {
        text_frame.add_paragraph(
            Paragraph::new()
                .aligned(Align::Center)
                .with_run(Run::new(line, Font::new(11.0, BG_DARK).bold())),
        );
    }
}

/// Slide 7: directory layout and key files.
fn structure_slide(slide: &mut Slide) {
    add_section_header(slide, "PROJECT STRUCTURE");

    add_panel(slide, fr(0.8, 1.5, 5.8, 5.3), BG_CARD);
    add_text(
        slide,
        fr(1.2, 1.7, 5.0, 0.4),
        "Directory Layout",
        TextStyle::new(20.0, ACCENT_GREEN).bold(),
    );
    let tree = [
        "Vibe-Survival-Game/",
        "  src/",
        "    main/",
        "      main.ts          (49 lines)",
        "      preload.ts       (3 lines)",
        "    renderer/",
        "      main.tsx         (11 lines)",
        "      App.tsx          (57 lines)",
        "      game/",
        "        GameScene.ts   (288 lines)",
        "        StartScene.ts  (60 lines)",
        "        Enemy.ts       (51 lines)",
        "  index.html",
        "  package.json",
        "  vite.config.ts",
        "  tsconfig.json",
    ]
    .join("\n");
    add_text(
        slide,
        fr(1.2, 2.2, 5.2, 4.5),
        &tree,
        TextStyle::new(13.0, GRAY).family("Consolas"),
    );

    add_panel(slide, fr(7.0, 1.5, 5.8, 5.3), BG_CARD);
    add_text(
        slide,
        fr(7.4, 1.7, 5.0, 0.4),
        "Key Files",
        TextStyle::new(20.0, ACCENT_YELLOW).bold(),
    );

    let files = [
        ("main.ts", "Electron main process, window creation"),
        ("App.tsx", "React root, Phaser initialization"),
        ("GameScene.ts", "Core gameplay logic (288 lines)"),
        ("StartScene.ts", "Menu screen, high scores"),
        ("Enemy.ts", "Enemy AI and behavior"),
        ("vite.config.ts", "Build configuration"),
        ("package.json", "Dependencies & scripts"),
    ];
    let mut y = 2.3;
    for (name, description) in files {
        add_text(
            slide,
            fr(7.4, y, 2.5, 0.35),
            name,
            TextStyle::new(14.0, ACCENT_BLUE).bold().family("Consolas"),
        );
        add_text(
            slide,
            fr(9.6, y, 2.8, 0.35),
            description,
            TextStyle::new(13.0, GRAY),
        );
        y += 0.6;
    }
}

/// Slide 8: implementation notes, four cards.
fn implementation_slide(slide: &mut Slide) {
    add_section_header(slide, "KEY IMPLEMENTATION DETAILS");

    add_panel(slide, fr(0.6, 1.4, 5.9, 2.6), BG_CARD);
    add_text(
        slide,
        fr(1.0, 1.6, 5.0, 0.4),
        "Procedural Graphics",
        TextStyle::new(18.0, ACCENT_GREEN).bold(),
    );
    add_text(
        slide,
        fr(1.0, 2.1, 5.2, 0.3),
        "No external assets - all graphics generated at runtime",
        TextStyle::new(13.0, GRAY),
    );
    let code_gfx = [
        "createTexture(key, color) {",
        "  const g = this.add.graphics();",
        "  g.fillStyle(color, 1);",
        "  g.fillRect(0, 0, 32, 32);",
        "  g.generateTexture(key, 32, 32);",
        "}",
    ]
    .join("\n");
    add_text(
        slide,
        fr(1.0, 2.5, 5.2, 1.3),
        &code_gfx,
        TextStyle::new(11.0, ACCENT_GREEN).family("Consolas"),
    );

    add_panel(slide, fr(6.9, 1.4, 5.9, 2.6), BG_CARD);
    add_text(
        slide,
        fr(7.3, 1.6, 5.0, 0.4),
        "Auto-Attack System",
        TextStyle::new(18.0, ACCENT_YELLOW).bold(),
    );
    add_text(
        slide,
        fr(7.3, 2.1, 5.2, 0.3),
        "Automatic targeting of nearest enemy within range",
        TextStyle::new(13.0, GRAY),
    );
    let code_atk = [
        "autoAttack() {",
        "  // Find nearest enemy within 300px",
        "  // Fire bullet at 400px/s velocity",
        "  // 0.5s cooldown between shots",
        "  // Bullet auto-destroys after 1s",
        "}",
    ]
    .join("\n");
    add_text(
        slide,
        fr(7.3, 2.5, 5.2, 1.3),
        &code_atk,
        TextStyle::new(11.0, ACCENT_YELLOW).family("Consolas"),
    );

    add_panel(slide, fr(0.6, 4.3, 5.9, 2.6), BG_CARD);
    add_text(
        slide,
        fr(1.0, 4.5, 5.0, 0.4),
        "Physics & Collision",
        TextStyle::new(18.0, ACCENT_BLUE).bold(),
    );
    add_bullets(
        slide,
        fr(1.0, 5.0, 5.2, 1.8),
        &[
            "Phaser Arcade Physics (no gravity)",
            "World bounds collision for all entities",
            "Knockback on player-enemy collision",
            "Bullet-enemy overlap detection",
        ],
        BulletStyle::new(13.0, ACCENT_BLUE),
    );

    add_panel(slide, fr(6.9, 4.3, 5.9, 2.6), BG_CARD);
    add_text(
        slide,
        fr(7.3, 4.5, 5.0, 0.4),
        "Data Persistence",
        TextStyle::new(18.0, ACCENT_PURPLE).bold(),
    );
    add_bullets(
        slide,
        fr(7.3, 5.0, 5.2, 1.8),
        &[
            "electron-store for high score storage",
            "JSON file in user config directory",
            "store.get('highScore', 0) to retrieve",
            "store.set('highScore', score) to save",
        ],
        BulletStyle::new(13.0, ACCENT_PURPLE),
    );
}

/// Slide 9: build workflow, dependencies, and platform notes.
fn build_tooling_slide(slide: &mut Slide) {
    add_section_header(slide, "DEVELOPMENT & BUILD");

    add_panel(slide, fr(0.8, 1.5, 5.8, 2.8), BG_CARD);
    add_text(
        slide,
        fr(1.2, 1.7, 5.0, 0.4),
        "NPM Scripts",
        TextStyle::new(20.0, ACCENT_GREEN).bold(),
    );
    let commands = [
        ("npm install", "Install all dependencies"),
        ("npm run dev", "Start dev server + Electron"),
        ("npm run build", "Build production application"),
        ("npm run preview", "Preview production build"),
    ];
    let mut y = 2.3;
    for (command, description) in commands {
        add_text(
            slide,
            fr(1.3, y, 2.3, 0.35),
            command,
            TextStyle::new(14.0, ACCENT_GREEN).bold().family("Consolas"),
        );
        add_text(
            slide,
            fr(3.6, y, 2.8, 0.35),
            description,
            TextStyle::new(14.0, GRAY),
        );
        y += 0.5;
    }

    add_panel(slide, fr(7.0, 1.5, 5.8, 2.8), BG_CARD);
    add_text(
        slide,
        fr(7.4, 1.7, 5.0, 0.4),
        "Dependencies",
        TextStyle::new(20.0, ACCENT_YELLOW).bold(),
    );
    let dependencies = [
        ("phaser", "v3.80.0", "Game engine"),
        ("react", "v18.2.0", "UI framework"),
        ("react-dom", "v18.2.0", "React DOM renderer"),
        ("electron", "v28.1.0", "Desktop framework"),
        ("electron-store", "v8.1.0", "Data persistence"),
    ];
    let mut y = 2.3;
    for (name, version, description) in dependencies {
        add_text(
            slide,
            fr(7.5, y, 1.8, 0.3),
            name,
            TextStyle::new(13.0, ACCENT_BLUE).bold().family("Consolas"),
        );
        add_text(
            slide,
            fr(9.3, y, 1.0, 0.3),
            version,
            TextStyle::new(12.0, DARK_GRAY).family("Consolas"),
        );
        add_text(
            slide,
            fr(10.3, y, 2.0, 0.3),
            description,
            TextStyle::new(13.0, GRAY),
        );
        y += 0.45;
    }

    add_panel(slide, fr(0.8, 4.6, 11.7, 2.5), BG_CARD);
    add_text(
        slide,
        fr(1.2, 4.8, 10.0, 0.4),
        "Platform Compatibility Notes",
        TextStyle::new(20.0, ACCENT_RED).bold(),
    );
    add_bullets(
        slide,
        fr(1.2, 5.4, 10.0, 1.5),
        &[
            "Hardware acceleration disabled for Linux compatibility (app.disableHardwareAcceleration())",
            "Canvas renderer forced instead of WebGL for cross-platform support",
            "Electron-builder configured for multi-platform packaging",
            "TypeScript strict mode enabled for type safety across all modules",
        ],
        BulletStyle::new(14.0, ACCENT_RED),
    );
}

/// Slide 10: closing summary.
fn summary_slide(slide: &mut Slide) {
    set_background(slide, BG_DARK);
    add_top_bar(slide);

    add_text(
        slide,
        fr(1.0, 1.5, 11.3, 1.0),
        "VIBE SURVIVAL GAME",
        TextStyle::new(48.0, WHITE).bold().centered(),
    );
    add_text(
        slide,
        fr(2.0, 2.7, 9.3, 0.6),
        "Project Summary",
        TextStyle::new(28.0, ACCENT_GREEN).centered(),
    );

    let summary = [
        ("2D Roguelike", "Top-down survival\nwith auto-attack"),
        ("Modern Stack", "Phaser 3 + React\n+ Electron + TS"),
        ("Lean Codebase", "519 lines across\n7 source files"),
        ("Zero Assets", "All graphics are\nprocedurally generated"),
    ];
    let mut x = 1.2;
    for (title, description) in summary {
        add_panel(slide, fr(x, 3.6, 2.4, 2.2), BG_CARD);
        add_text(
            slide,
            fr(x + 0.2, 3.8, 2.0, 0.4),
            title,
            TextStyle::new(16.0, ACCENT_GREEN).bold().centered(),
        );
        add_text(
            slide,
            fr(x + 0.2, 4.4, 2.0, 1.2),
            description,
            TextStyle::new(14.0, GRAY).centered(),
        );
        x += 2.7;
    }

    add_text(
        slide,
        fr(2.0, 6.3, 9.3, 0.6),
        "THANK YOU",
        TextStyle::new(32.0, WHITE).bold().centered(),
    );
    add_rect(slide, fr(0.0, 7.44, SLIDE_W, 0.06), ACCENT_GREEN);
}

/// Assemble the full ten-slide deck on a widescreen canvas.
pub fn build() -> Presentation {
    let mut presentation = Presentation::widescreen();

    title_slide(presentation.add_slide());
    overview_slide(presentation.add_slide());
    tech_stack_slide(presentation.add_slide());
    architecture_slide(presentation.add_slide());
    mechanics_slide(presentation.add_slide());
    state_progression_slide(presentation.add_slide());
    structure_slide(presentation.add_slide());
    implementation_slide(presentation.add_slide());
    build_tooling_slide(presentation.add_slide());
    summary_slide(presentation.add_slide());

    presentation
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_core::{Emu, Geometry};

    /// First text carried by any shape on the slide, in z-order.
    fn first_text(slide: &Slide) -> String {
        slide
            .shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .flat_map(|t| t.paragraphs.first())
            .map(|p| p.text())
            .next()
            .unwrap_or_default()
    }

    #[test]
    fn test_deck_has_ten_slides_in_fixed_order() {
        let prs = build();
        assert_eq!(prs.slide_count(), 10);

        let headings: Vec<String> = prs.slides.iter().map(first_text).collect();
        assert_eq!(
            headings,
            vec![
                "VIBE SURVIVAL GAME",
                "PROJECT OVERVIEW",
                "TECH STACK",
                "ARCHITECTURE",
                "CORE GAME MECHANICS",
                "GAME STATE & PROGRESSION",
                "PROJECT STRUCTURE",
                "KEY IMPLEMENTATION DETAILS",
                "DEVELOPMENT & BUILD",
                "VIBE SURVIVAL GAME",
            ]
        );
    }

    #[test]
    fn test_canvas_is_widescreen() {
        let prs = build();
        assert_eq!(prs.width, Emu::from_inches(13.333));
        assert_eq!(prs.height, Emu::from_inches(7.5));
    }

    #[test]
    fn test_every_slide_has_a_background_and_shapes() {
        let prs = build();
        for (index, slide) in prs.slides.iter().enumerate() {
            assert!(slide.background.is_some(), "slide {} has no background", index + 1);
            assert!(slide.shape_count() > 0, "slide {} is empty", index + 1);
        }
        assert_eq!(prs.slides[0].background, Some(BG_DARK));
        assert_eq!(prs.slides[1].background, Some(BG_SLIDE));
        assert_eq!(prs.slides[9].background, Some(BG_DARK));
    }

    #[test]
    fn test_overview_lists_survive_the_port() {
        let prs = build();
        let overview = &prs.slides[1];

        // Two cards, each a rounded panel followed by a heading and content.
        let panels = overview
            .shapes
            .iter()
            .filter(|s| s.geometry == Geometry::RoundedRectangle)
            .count();
        assert_eq!(panels, 2);

        let bullet_list = overview
            .shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .find(|t| t.paragraph_count() == 7)
            .expect("overview card should carry seven bullets");
        assert_eq!(
            bullet_list.paragraphs[0].text(),
            "▸ 2D Top-Down Roguelike Survival Game"
        );
        assert_eq!(
            bullet_list.paragraphs[6].text(),
            "▸ High score persistence across sessions"
        );
    }

    #[test]
    fn test_flow_strip_alternates_stages_and_arrows() {
        let prs = build();
        let flow = &prs.slides[5];

        let arrows = flow
            .shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .filter(|t| t.paragraphs.len() == 1 && t.paragraphs[0].text() == "->")
            .count();
        assert_eq!(arrows, 5);

        // Six colored stage boxes, each with a two-line centered label.
        let stages = flow
            .shapes
            .iter()
            .filter(|s| {
                s.geometry == Geometry::RoundedRectangle
                    && s.text.as_ref().map_or(false, |t| t.paragraph_count() == 2)
            })
            .count();
        assert_eq!(stages, 6);
    }

    #[test]
    fn test_monospace_blocks_keep_their_lines() {
        let prs = build();
        let structure = &prs.slides[6];

        let tree = structure
            .shapes
            .iter()
            .filter_map(|s| s.text.as_ref())
            .find(|t| t.paragraph_count() == 16)
            .expect("directory layout should have sixteen lines");
        assert_eq!(tree.paragraphs[0].text(), "Vibe-Survival-Game/");
        assert_eq!(
            tree.paragraphs[0].runs[0].font.family.as_deref(),
            Some("Consolas")
        );
        assert_eq!(tree.paragraphs[15].text(), "  tsconfig.json");
    }
}
