//! Calculator definition tables.
//!
//! Pure data: field schemas, result labels and localized copy for every
//! calculator in the catalog. Field ids here are the contract with the
//! formula implementations in [`crate::calculations`].

use crate::calculations::FormulaKey;
use crate::units::{QuantityKind, UnitKind};

use super::{
    CalculatorDefinition, CalculatorFaq, Guide, GuideSection, InputField, LocalizedText,
    ResultLabel, SelectOption,
};

const fn t(en: &'static str, ru: &'static str) -> LocalizedText {
    LocalizedText::new(en, ru)
}

pub(super) fn build() -> Vec<CalculatorDefinition> {
    vec![
        concrete(),
        paint(),
        flooring(),
        tile(),
        roofing(),
        drywall(),
        wallpaper(),
        brick(),
        insulation(),
        plaster(),
        screed(),
        electrical(),
    ]
}

fn concrete() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "concrete",
        formula: FormulaKey::Concrete,
        rating: 4.8,
        title: t("Concrete Calculator", "Калькулятор бетона"),
        description: t(
            "Ready-mix volume for slabs and cylindrical columns, with waste.",
            "Объём бетона для плит и колонн с учётом запаса.",
        ),
        how_it_works: t(
            "Slab volume is length × width × thickness; cylinder volume is π × (d/2)² × height. The waste factor is applied to the result before ordering.",
            "Объём плиты — длина × ширина × толщина; объём колонны — π × (d/2)² × высота. Запас применяется к результату перед заказом.",
        ),
        inputs: vec![
            InputField::select(
                "mode",
                t("Shape", "Форма"),
                vec![
                    SelectOption { value: "slab", label: t("Slab", "Плита") },
                    SelectOption { value: "cylinder", label: t("Cylinder", "Колонна") },
                ],
            )
            .with_default("slab"),
            InputField::number("length", t("Length", "Длина"))
                .with_unit(UnitKind::Length)
                .with_defaults(6.0, 20.0)
                .with_range(0.0, 1000.0, 0.1)
                .with_group("slab"),
            InputField::number("width", t("Width", "Ширина"))
                .with_unit(UnitKind::Width)
                .with_defaults(4.0, 13.0)
                .with_range(0.0, 1000.0, 0.1)
                .with_group("slab"),
            InputField::number("thickness", t("Thickness", "Толщина"))
                .with_unit(UnitKind::Thickness)
                .with_defaults(0.15, 0.5)
                .with_range(0.0, 10.0, 0.01)
                .with_group("slab"),
            InputField::number("diameter", t("Diameter", "Диаметр"))
                .with_unit(UnitKind::Diameter)
                .with_defaults(0.4, 1.3)
                .with_range(0.0, 50.0, 0.01)
                .with_group("cylinder"),
            InputField::number("height", t("Height", "Высота"))
                .with_unit(UnitKind::Height)
                .with_defaults(3.0, 10.0)
                .with_range(0.0, 100.0, 0.1)
                .with_group("cylinder"),
        ],
        faq: vec![
            CalculatorFaq {
                question: t("How much extra should I order?", "Сколько брать с запасом?"),
                answer: t(
                    "8-10% covers spillage, uneven subgrade and pump line losses; the country profile pre-fills a regional figure.",
                    "8-10% покрывает проливы, неровное основание и потери в насосе; профиль страны подставляет региональное значение.",
                ),
            },
            CalculatorFaq {
                question: t("Does the result include reinforcement?", "Учитывается ли арматура?"),
                answer: t(
                    "No. Rebar displaces under 1% of the pour and is ignored.",
                    "Нет. Арматура вытесняет менее 1% объёма и не учитывается.",
                ),
            },
        ],
        guide: Some(Guide {
            intro: t(
                "Measure the formwork, not the drawing: as-built dimensions routinely differ by a few centimeters.",
                "Измеряйте опалубку, а не чертёж: фактические размеры обычно отличаются на несколько сантиметров.",
            ),
            sections: vec![
                GuideSection::Paragraph {
                    body: "For slabs on grade, probe the subgrade level at several points and use the largest thickness you find. A 10 mm average error on a 50 m² slab is half a cubic meter of concrete.",
                },
                GuideSection::List {
                    items: vec![
                        "Order full truck increments where possible",
                        "Schedule the pour before ordering, not after",
                        "Have one spare form tie kit on site",
                    ],
                },
            ],
        }),
        result_labels: vec![ResultLabel::new(
            "volume",
            t("Concrete volume", "Объём бетона"),
            QuantityKind::Volume,
            "m³",
        )],
    }
}

fn paint() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "paint",
        formula: FormulaKey::Paint,
        rating: 4.7,
        title: t("Paint Calculator", "Калькулятор краски"),
        description: t(
            "Wall area and liters of paint from room perimeter, height and openings.",
            "Площадь стен и литры краски по периметру, высоте и проёмам.",
        ),
        how_it_works: t(
            "Wall area is perimeter × height minus openings. Liters are area × coats divided by the paint's coverage per liter.",
            "Площадь стен — периметр × высота минус проёмы. Литры — площадь × число слоёв, делённые на укрывистость краски.",
        ),
        inputs: vec![
            InputField::number("perimeter", t("Room perimeter", "Периметр комнаты"))
                .with_unit(UnitKind::Length)
                .with_defaults(20.0, 65.0)
                .with_range(0.0, 1000.0, 0.1),
            InputField::number("height", t("Wall height", "Высота стен"))
                .with_unit(UnitKind::Height)
                .with_defaults(2.7, 9.0)
                .with_range(0.0, 20.0, 0.05),
            InputField::number("openings", t("Doors and windows", "Двери и окна"))
                .with_description(t(
                    "Total area of openings that will not be painted",
                    "Суммарная площадь неокрашиваемых проёмов",
                ))
                .with_unit(UnitKind::Area)
                .with_defaults(2.0, 21.0)
                .with_range(0.0, 500.0, 0.1),
            InputField::number("coats", t("Coats", "Число слоёв"))
                .with_unit(UnitKind::Count)
                .with_default(2.0)
                .with_range(1.0, 5.0, 1.0),
            InputField::number("coverage", t("Coverage", "Укрывистость"))
                .with_unit(UnitKind::Coverage)
                .with_defaults(10.0, 380.0)
                .with_range(1.0, 1000.0, 0.5),
        ],
        faq: vec![CalculatorFaq {
            question: t("One coat or two?", "Один слой или два?"),
            answer: t(
                "Two coats is the default everywhere; a single coat only covers when repainting in the same color.",
                "По умолчанию два слоя; один слой достаточен только при перекраске в тот же цвет.",
            ),
        }],
        guide: Some(Guide {
            intro: t(
                "Coverage printed on the can assumes a smooth, primed surface.",
                "Укрывистость на банке указана для гладкой загрунтованной поверхности.",
            ),
            sections: vec![GuideSection::Paragraph {
                body: "Textured plaster or first-time drywall can absorb 20-30% more paint than the label figure. Buy the last liter after the first coat is on the wall.",
            }],
        }),
        result_labels: vec![
            ResultLabel::new(
                "area",
                t("Painted area", "Окрашиваемая площадь"),
                QuantityKind::Area,
                "m²",
            ),
            ResultLabel::new(
                "volume",
                t("Paint required", "Краска"),
                QuantityKind::Liquid,
                "L",
            ),
        ],
    }
}

fn flooring() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "flooring",
        formula: FormulaKey::Flooring,
        rating: 4.6,
        title: t("Flooring Calculator", "Калькулятор напольных покрытий"),
        description: t(
            "Laminate or parquet packs for a room, rounded up to whole packs.",
            "Число упаковок ламината или паркета с округлением вверх.",
        ),
        how_it_works: t(
            "Floor area with waste is divided by the coverage of one retail pack and rounded up.",
            "Площадь пола с запасом делится на покрытие одной упаковки и округляется вверх.",
        ),
        inputs: vec![
            InputField::number("length", t("Room length", "Длина комнаты"))
                .with_unit(UnitKind::Length)
                .with_defaults(5.0, 16.0)
                .with_range(0.0, 200.0, 0.1),
            InputField::number("width", t("Room width", "Ширина комнаты"))
                .with_unit(UnitKind::Width)
                .with_defaults(4.0, 13.0)
                .with_range(0.0, 200.0, 0.1),
            InputField::number("packCoverage", t("Pack coverage", "Покрытие упаковки"))
                .with_unit(UnitKind::Area)
                .with_defaults(2.2, 24.0)
                .with_range(0.1, 100.0, 0.1),
        ],
        faq: vec![CalculatorFaq {
            question: t(
                "Why keep a spare pack?",
                "Зачем оставлять запасную упаковку?",
            ),
            answer: t(
                "Boards from a later production batch rarely match in shade; repairs come from your own leftover stock.",
                "Доски из другой партии почти всегда отличаются оттенком; ремонт делают из собственного остатка.",
            ),
        }],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "area",
                t("Floor area", "Площадь пола"),
                QuantityKind::Area,
                "m²",
            ),
            ResultLabel::new("packs", t("Packs", "Упаковки"), QuantityKind::Count, "pcs"),
        ],
    }
}

fn tile() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "tile",
        formula: FormulaKey::Tile,
        rating: 4.9,
        title: t("Tile Calculator", "Калькулятор плитки"),
        description: t(
            "Tile count for floors and walls, with straight or diagonal layout.",
            "Количество плитки для пола и стен при прямой или диагональной укладке.",
        ),
        how_it_works: t(
            "Surface area with waste is divided by the area of one tile and rounded up. Diagonal layout replaces your waste setting with the regional diagonal-cut figure.",
            "Площадь с запасом делится на площадь одной плитки и округляется вверх. При диагональной укладке запас заменяется региональным значением для подрезки.",
        ),
        inputs: vec![
            InputField::number("length", t("Surface length", "Длина поверхности"))
                .with_unit(UnitKind::Length)
                .with_defaults(5.0, 16.0)
                .with_range(0.0, 200.0, 0.1),
            InputField::number("width", t("Surface width", "Ширина поверхности"))
                .with_unit(UnitKind::Width)
                .with_defaults(3.0, 10.0)
                .with_range(0.0, 200.0, 0.1),
            InputField::number("tileLength", t("Tile length", "Длина плитки"))
                .with_unit(UnitKind::Length)
                .with_defaults(0.6, 2.0)
                .with_range(0.01, 5.0, 0.01),
            InputField::number("tileWidth", t("Tile width", "Ширина плитки"))
                .with_unit(UnitKind::Width)
                .with_defaults(0.3, 1.0)
                .with_range(0.01, 5.0, 0.01),
            InputField::toggle("diagonal", t("Diagonal layout", "Диагональная укладка"))
                .with_default(false),
        ],
        faq: vec![CalculatorFaq {
            question: t(
                "How much more does diagonal layout waste?",
                "Сколько теряется при диагональной укладке?",
            ),
            answer: t(
                "Every row ends in a cut triangle, so 12-15% instead of the usual 10%. The calculator switches automatically.",
                "Каждый ряд заканчивается срезанным треугольником, поэтому 12-15% вместо обычных 10%. Калькулятор переключается сам.",
            ),
        }],
        guide: Some(Guide {
            intro: t(
                "Count boxes, but think in tiles: breakage happens per tile.",
                "Считайте коробки, но думайте в плитках: бой случается поштучно.",
            ),
            sections: vec![GuideSection::List {
                items: vec![
                    "Dry-lay one row before mixing adhesive",
                    "Keep cut offcuts for window sills and steps",
                    "Large-format tiles need a flatter substrate, not more tiles",
                ],
            }],
        }),
        result_labels: vec![
            ResultLabel::new(
                "area",
                t("Tiled area", "Площадь укладки"),
                QuantityKind::Area,
                "m²",
            ),
            ResultLabel::new("tiles", t("Tiles", "Плитки"), QuantityKind::Count, "pcs"),
        ],
    }
}

fn roofing() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "roofing",
        formula: FormulaKey::Roofing,
        rating: 4.5,
        title: t("Roofing Calculator", "Калькулятор кровли"),
        description: t(
            "Shingle bundles from the roof footprint and pitch angle.",
            "Пачки гонта по площади основания и углу ската.",
        ),
        how_it_works: t(
            "The horizontal footprint is divided by the cosine of the pitch to get slope area, then by bundle coverage.",
            "Площадь основания делится на косинус угла ската, затем на покрытие одной пачки.",
        ),
        inputs: vec![
            InputField::number("length", t("Roof length", "Длина крыши"))
                .with_unit(UnitKind::Length)
                .with_defaults(10.0, 33.0)
                .with_range(0.0, 500.0, 0.1),
            InputField::number("width", t("Roof width", "Ширина крыши"))
                .with_unit(UnitKind::Width)
                .with_defaults(8.0, 26.0)
                .with_range(0.0, 500.0, 0.1),
            InputField::number("angle", t("Pitch angle", "Угол ската"))
                .with_unit(UnitKind::Angle)
                .with_default(28.0)
                .with_range(0.0, 85.0, 1.0),
            InputField::number("bundleCoverage", t("Bundle coverage", "Покрытие пачки"))
                .with_unit(UnitKind::Area)
                .with_defaults(3.1, 33.0)
                .with_range(0.1, 100.0, 0.1),
        ],
        faq: vec![CalculatorFaq {
            question: t("What about hips and valleys?", "А вальмы и ендовы?"),
            answer: t(
                "Complex roofs cut more waste at hips and valleys; raise the waste factor a few points rather than guessing per-plane.",
                "На сложных крышах больше подрезки на вальмах и ендовах; увеличьте запас на несколько пунктов вместо пересчёта по скатам.",
            ),
        }],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "area",
                t("Slope area", "Площадь скатов"),
                QuantityKind::Area,
                "m²",
            ),
            ResultLabel::new(
                "bundles",
                t("Bundles", "Пачки"),
                QuantityKind::Count,
                "pcs",
            ),
        ],
    }
}

fn drywall() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "drywall",
        formula: FormulaKey::Drywall,
        rating: 4.6,
        title: t("Drywall Calculator", "Калькулятор гипсокартона"),
        description: t(
            "Sheets for walls from perimeter, height and openings.",
            "Листы для стен по периметру, высоте и проёмам.",
        ),
        how_it_works: t(
            "Wall area minus openings, with waste, divided by the area of one sheet and rounded up.",
            "Площадь стен минус проёмы, с запасом, делится на площадь листа и округляется вверх.",
        ),
        inputs: vec![
            InputField::number("perimeter", t("Wall run", "Длина стен"))
                .with_unit(UnitKind::Length)
                .with_defaults(20.0, 65.0)
                .with_range(0.0, 1000.0, 0.1),
            InputField::number("height", t("Wall height", "Высота стен"))
                .with_unit(UnitKind::Height)
                .with_defaults(2.8, 9.0)
                .with_range(0.0, 20.0, 0.05),
            InputField::number("openings", t("Openings", "Проёмы"))
                .with_unit(UnitKind::Area)
                .with_defaults(4.0, 43.0)
                .with_range(0.0, 500.0, 0.1),
            InputField::number("sheetArea", t("Sheet area", "Площадь листа"))
                .with_unit(UnitKind::Area)
                .with_defaults(2.88, 32.0)
                .with_range(0.5, 20.0, 0.01),
        ],
        faq: vec![CalculatorFaq {
            question: t(
                "Why is drywall waste so high?",
                "Почему у гипсокартона такой большой запас?",
            ),
            answer: t(
                "Sheets break, corners need full-height offcuts, and every cut-out for a box scraps material. 12-15% is normal.",
                "Листы ломаются, углы требуют цельных обрезков, а каждый вырез под коробку идёт в отход. 12-15% — норма.",
            ),
        }],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "area",
                t("Wall area", "Площадь стен"),
                QuantityKind::Area,
                "m²",
            ),
            ResultLabel::new("sheets", t("Sheets", "Листы"), QuantityKind::Count, "pcs"),
        ],
    }
}

fn wallpaper() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "wallpaper",
        formula: FormulaKey::Wallpaper,
        rating: 4.7,
        title: t("Wallpaper Calculator", "Калькулятор обоев"),
        description: t(
            "Rolls from room perimeter, wall height and roll geometry.",
            "Рулоны по периметру комнаты, высоте стен и размерам рулона.",
        ),
        how_it_works: t(
            "A roll yields floor(roll length / (height + trim allowance)) strips; the room needs perimeter / roll width strips with waste; rolls are the rounded-up quotient.",
            "Из рулона выходит floor(длина рулона / (высота + припуск)) полотен; комнате нужно периметр / ширина рулона полотен с запасом; рулоны — округлённое вверх частное.",
        ),
        inputs: vec![
            InputField::number("perimeter", t("Room perimeter", "Периметр комнаты"))
                .with_unit(UnitKind::Length)
                .with_defaults(25.0, 82.0)
                .with_range(0.0, 500.0, 0.1),
            InputField::number("height", t("Wall height", "Высота стен"))
                .with_unit(UnitKind::Height)
                .with_defaults(2.6, 8.5)
                .with_range(0.0, 10.0, 0.05),
            InputField::number("allowance", t("Trim allowance", "Припуск на подрезку"))
                .with_description(t(
                    "Extra length per strip for pattern matching and trimming",
                    "Дополнительная длина полотна на стыковку рисунка и подрезку",
                ))
                .with_unit(UnitKind::Length)
                .with_defaults(0.1, 0.33)
                .with_range(0.0, 1.0, 0.01),
            InputField::number("rollLength", t("Roll length", "Длина рулона"))
                .with_unit(UnitKind::Length)
                .with_defaults(10.05, 33.0)
                .with_range(1.0, 100.0, 0.05),
            InputField::number("rollWidth", t("Roll width", "Ширина рулона"))
                .with_unit(UnitKind::Width)
                .with_defaults(0.53, 1.75)
                .with_range(0.1, 3.0, 0.01),
        ],
        faq: vec![CalculatorFaq {
            question: t(
                "Does pattern repeat change the result?",
                "Влияет ли раппорт на результат?",
            ),
            answer: t(
                "Yes: add the repeat length to the trim allowance and the strip math accounts for it.",
                "Да: добавьте длину раппорта к припуску, и расчёт полотен это учтёт.",
            ),
        }],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "strips",
                t("Strips", "Полотна"),
                QuantityKind::Count,
                "pcs",
            ),
            ResultLabel::new("rolls", t("Rolls", "Рулоны"), QuantityKind::Count, "pcs"),
        ],
    }
}

fn brick() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "brick",
        formula: FormulaKey::Brick,
        rating: 4.5,
        title: t("Brick Calculator", "Калькулятор кирпича"),
        description: t(
            "Bricks and mortar volume for a wall area.",
            "Кирпич и раствор на площадь стены.",
        ),
        how_it_works: t(
            "Wall area times the regional bricks-per-square-meter figure, plus mortar volume per square meter, both with waste.",
            "Площадь стены умножается на региональный расход кирпича на квадратный метр и на расход раствора, оба с запасом.",
        ),
        inputs: vec![
            InputField::number("wallArea", t("Wall area", "Площадь стены"))
                .with_unit(UnitKind::Area)
                .with_defaults(40.0, 430.0)
                .with_range(0.0, 5000.0, 0.5),
            InputField::number("bricksPerSqm", t("Bricks per m²", "Кирпичей на м²"))
                .with_unit(UnitKind::Count)
                .with_default(50.0)
                .with_range(20.0, 120.0, 1.0),
            InputField::number("mortarPerSqm", t("Mortar per m²", "Раствор на м²"))
                .with_unit(UnitKind::Volume)
                .with_default(0.035)
                .with_range(0.0, 0.2, 0.001),
        ],
        faq: vec![CalculatorFaq {
            question: t("Single or double wythe?", "В полкирпича или в кирпич?"),
            answer: t(
                "The default consumption figure is for a single-wythe wall; double the bricks-per-m² for a full-brick wall.",
                "Расход по умолчанию дан для кладки в полкирпича; для кладки в кирпич удвойте значение.",
            ),
        }],
        guide: None,
        result_labels: vec![
            ResultLabel::new("bricks", t("Bricks", "Кирпичи"), QuantityKind::Count, "pcs"),
            ResultLabel::new(
                "mortar",
                t("Mortar volume", "Объём раствора"),
                QuantityKind::Volume,
                "m³",
            ),
        ],
    }
}

fn insulation() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "insulation",
        formula: FormulaKey::Insulation,
        rating: 4.4,
        title: t("Insulation Calculator", "Калькулятор утеплителя"),
        description: t(
            "Mineral wool volume and rolls for an area and layer thickness.",
            "Объём и рулоны минваты на площадь и толщину слоя.",
        ),
        how_it_works: t(
            "Volume is area × thickness with waste; rolls follow the covered area divided by one roll's coverage.",
            "Объём — площадь × толщина с запасом; рулоны — покрываемая площадь, делённая на покрытие рулона.",
        ),
        inputs: vec![
            InputField::number("area", t("Area to insulate", "Утепляемая площадь"))
                .with_unit(UnitKind::Area)
                .with_defaults(50.0, 540.0)
                .with_range(0.0, 5000.0, 0.5),
            InputField::number("thickness", t("Layer thickness", "Толщина слоя"))
                .with_unit(UnitKind::Thickness)
                .with_defaults(0.1, 0.33)
                .with_range(0.0, 1.0, 0.01),
            InputField::number("rollArea", t("Roll coverage", "Покрытие рулона"))
                .with_unit(UnitKind::Area)
                .with_defaults(10.0, 108.0)
                .with_range(0.0, 100.0, 0.1),
        ],
        faq: vec![],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "volume",
                t("Insulation volume", "Объём утеплителя"),
                QuantityKind::Volume,
                "m³",
            ),
            ResultLabel::new("rolls", t("Rolls", "Рулоны"), QuantityKind::Count, "pcs"),
        ],
    }
}

fn plaster() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "plaster",
        formula: FormulaKey::Plaster,
        rating: 4.4,
        title: t("Plaster Calculator", "Калькулятор штукатурки"),
        description: t(
            "Plaster volume and bags for a wall area and coat thickness.",
            "Объём штукатурки и мешки на площадь и толщину слоя.",
        ),
        how_it_works: t(
            "Volume is area × average coat thickness with waste, divided by the mixed volume one bag yields.",
            "Объём — площадь × средняя толщина слоя с запасом, делённая на выход раствора из одного мешка.",
        ),
        inputs: vec![
            InputField::number("area", t("Wall area", "Площадь стен"))
                .with_unit(UnitKind::Area)
                .with_defaults(40.0, 430.0)
                .with_range(0.0, 5000.0, 0.5),
            InputField::number("thickness", t("Coat thickness", "Толщина слоя"))
                .with_description(t(
                    "Average over the wall; uneven walls need the mean, not the minimum",
                    "Среднее по стене; для неровных стен берите среднее, а не минимум",
                ))
                .with_unit(UnitKind::Thickness)
                .with_defaults(0.01, 0.033)
                .with_range(0.0, 0.2, 0.001),
            InputField::number("coveragePerBag", t("Yield per bag", "Выход из мешка"))
                .with_unit(UnitKind::Volume)
                .with_default(0.1)
                .with_range(0.0, 1.0, 0.005),
        ],
        faq: vec![],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "volume",
                t("Plaster volume", "Объём штукатурки"),
                QuantityKind::Volume,
                "m³",
            ),
            ResultLabel::new("bags", t("Bags", "Мешки"), QuantityKind::Count, "pcs"),
            ResultLabel::new(
                "area",
                t("Wall area", "Площадь стен"),
                QuantityKind::Area,
                "m²",
            ),
        ],
    }
}

fn screed() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "screed",
        formula: FormulaKey::Screed,
        rating: 4.5,
        title: t("Screed Calculator", "Калькулятор стяжки"),
        description: t(
            "Screed volume split into cement bags and sand by mix ratio.",
            "Объём стяжки с разбивкой на цемент в мешках и песок по пропорции.",
        ),
        how_it_works: t(
            "Volume is area × thickness with waste, split by the cement:sand ratio. Cement converts to weight at 1500 kg/m³ and to whole 50 kg bags.",
            "Объём — площадь × толщина с запасом, делится по пропорции цемент:песок. Цемент переводится в вес при 1500 кг/м³ и в целые мешки по 50 кг.",
        ),
        inputs: vec![
            InputField::number("area", t("Floor area", "Площадь пола"))
                .with_unit(UnitKind::Area)
                .with_defaults(30.0, 320.0)
                .with_range(0.0, 2000.0, 0.5),
            InputField::number("thickness", t("Screed thickness", "Толщина стяжки"))
                .with_unit(UnitKind::Thickness)
                .with_defaults(0.05, 0.16)
                .with_range(0.0, 0.5, 0.005),
            InputField::number("cementRatio", t("Cement parts", "Части цемента"))
                .with_unit(UnitKind::Count)
                .with_default(0.2)
                .with_range(0.0, 10.0, 0.1),
            InputField::number("sandRatio", t("Sand parts", "Части песка"))
                .with_unit(UnitKind::Count)
                .with_default(3.0)
                .with_range(0.0, 10.0, 0.1),
        ],
        faq: vec![CalculatorFaq {
            question: t("What mix ratio should I use?", "Какую пропорцию выбрать?"),
            answer: t(
                "1:3 is the common floor screed mix; leaner mixes save cement but lose strength.",
                "1:3 — обычная пропорция для стяжки пола; более тощие смеси экономят цемент, но теряют прочность.",
            ),
        }],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "volume",
                t("Screed volume", "Объём стяжки"),
                QuantityKind::Volume,
                "m³",
            ),
            ResultLabel::new(
                "cementWeight",
                t("Cement weight", "Вес цемента"),
                QuantityKind::Count,
                "kg",
            ),
            ResultLabel::new(
                "cementBags",
                t("Cement bags", "Мешки цемента"),
                QuantityKind::Count,
                "pcs",
            ),
            ResultLabel::new(
                "sandVolume",
                t("Sand volume", "Объём песка"),
                QuantityKind::Volume,
                "m³",
            ),
        ],
    }
}

fn electrical() -> CalculatorDefinition {
    CalculatorDefinition {
        slug: "electrical",
        formula: FormulaKey::Electrical,
        rating: 4.3,
        title: t("Electrical Calculator", "Калькулятор электрики"),
        description: t(
            "Rough-in cable length and conduit sticks for a room.",
            "Длина кабеля и штук гофры для черновой разводки.",
        ),
        how_it_works: t(
            "One vertical drop per socket or switch plus 1.5× the perimeter for horizontal runs, with waste, in 3 m conduit sticks.",
            "Один вертикальный спуск на розетку или выключатель плюс 1,5 периметра на горизонтальные трассы, с запасом, в гофре по 3 м.",
        ),
        inputs: vec![
            InputField::number("perimeter", t("Room perimeter", "Периметр комнаты"))
                .with_unit(UnitKind::Length)
                .with_defaults(40.0, 130.0)
                .with_range(0.0, 1000.0, 0.1),
            InputField::number("height", t("Ceiling height", "Высота потолка"))
                .with_unit(UnitKind::Height)
                .with_defaults(2.7, 9.0)
                .with_range(0.0, 10.0, 0.05),
            InputField::number("sockets", t("Sockets", "Розетки"))
                .with_unit(UnitKind::Count)
                .with_default(10.0)
                .with_range(0.0, 200.0, 1.0),
            InputField::number("switches", t("Switches", "Выключатели"))
                .with_unit(UnitKind::Count)
                .with_default(5.0)
                .with_range(0.0, 100.0, 1.0),
        ],
        faq: vec![],
        guide: None,
        result_labels: vec![
            ResultLabel::new(
                "cableLength",
                t("Cable length", "Длина кабеля"),
                QuantityKind::Length,
                "m",
            ),
            ResultLabel::new(
                "sockets",
                t("Sockets", "Розетки"),
                QuantityKind::Count,
                "pcs",
            ),
            ResultLabel::new(
                "switches",
                t("Switches", "Выключатели"),
                QuantityKind::Count,
                "pcs",
            ),
            ResultLabel::new(
                "conduits",
                t("Conduit sticks", "Гофра"),
                QuantityKind::Count,
                "pcs",
            ),
        ],
    }
}
